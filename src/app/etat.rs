//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l'accumulateur du noyau et le petit habillage cosmétique
//! (glyphes ÷ × −) que la vue affiche. Toute la logique vit dans
//! noyau::accumulateur ; ici on ne fait que relayer des Commande.

use crate::noyau::{Accumulateur, Commande, Operateur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Accumulateur,
}

impl AppCalc {
    /// Relais : une entrée (bouton ou touche) = une commande du noyau.
    pub fn appliquer(&mut self, cmd: Commande) {
        self.calc.appliquer(cmd);
    }

    /// Expression en attente avec les glyphes d'affichage (× ÷ −).
    /// Cosmétique pur : le texte évalué garde * / -.
    pub fn attente_avec_glyphes(&self) -> String {
        self.calc
            .affichage_attente()
            .chars()
            .map(|c| match c {
                '*' => Operateur::Fois.glyphe(),
                '/' => Operateur::Divise.glyphe(),
                '-' => Operateur::Moins.glyphe(),
                autre => autre,
            })
            .collect()
    }
}
