// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux afficheurs alignés à droite : attente (petit) + courant (grand)
// - Pavé 4 colonnes : C x² √x π / 7 8 9 ÷ / 4 5 6 × / 1 2 3 − / . 0 = +
// - Chaque bouton produit une Commande ; la vue ne mute jamais l'état
//   autrement que par Accumulateur::appliquer (via AppCalc)

use eframe::egui;

use crate::noyau::{Commande, FonctionUnaire, Operateur};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Afficheurs ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Alignement à droite, comme une calculatrice de bureau.
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.attente_avec_glyphes())
                            .monospace()
                            .size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(self.calc.affichage_courant())
                            .monospace()
                            .strong()
                            .size(32.0),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Commande::Effacer);
                self.bouton(ui, "x²", Commande::Unaire(FonctionUnaire::Carre));
                self.bouton(ui, "√x", Commande::Unaire(FonctionUnaire::RacineCarree));
                self.bouton(ui, "π", Commande::Unaire(FonctionUnaire::FoisPi));
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_operateur(ui, Operateur::Divise);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_operateur(ui, Operateur::Fois);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_operateur(ui, Operateur::Moins);
                ui.end_row();

                self.bouton_chiffre(ui, '.');
                self.bouton_chiffre(ui, '0');
                self.bouton(ui, "=", Commande::Egal);
                self.bouton_operateur(ui, Operateur::Plus);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, cmd: Commande) {
        let resp = ui.add_sized(
            [84.0, 56.0],
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if resp.clicked() {
            self.appliquer(cmd);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let mut buf = [0u8; 4];
        let label: &str = c.encode_utf8(&mut buf);
        self.bouton(ui, label, Commande::Chiffre(c));
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let mut buf = [0u8; 4];
        let label: &str = op.glyphe().encode_utf8(&mut buf);
        self.bouton(ui, label, Commande::Operateur(op));
    }
}
