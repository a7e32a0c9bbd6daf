// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Raccourcis clavier globaux : chaque événement devient une Commande,
//   consommée de façon synchrone — même chemin que les boutons.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Commande, Operateur};

/// Traduit un caractère tapé en commande du noyau.
/// Tout le reste (lettres, ponctuation) est ignoré.
fn commande_de_caractere(c: char) -> Option<Commande> {
    match c {
        '0'..='9' | '.' => Some(Commande::Chiffre(c)),
        '+' => Some(Commande::Operateur(Operateur::Plus)),
        '-' => Some(Commande::Operateur(Operateur::Moins)),
        '*' => Some(Commande::Operateur(Operateur::Fois)),
        '/' => Some(Commande::Operateur(Operateur::Divise)),
        '=' => Some(Commande::Egal),
        'c' | 'C' => Some(Commande::Effacer),
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier : texte (chiffres/opérateurs) + Enter (=) + Escape (C).
        // On collecte d'abord, on applique ensuite — l'emprunt de l'input
        // ne doit pas chevaucher la mutation de l'état.
        let mut commandes: Vec<Commande> = Vec::new();

        ctx.input(|i| {
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => {
                        commandes.extend(t.chars().filter_map(commande_de_caractere));
                    }
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => commandes.push(Commande::Egal),
                    egui::Event::Key {
                        key: egui::Key::Escape,
                        pressed: true,
                        ..
                    } => commandes.push(Commande::Effacer),
                    _ => {}
                }
            }
        });

        for cmd in commandes {
            self.appliquer(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
