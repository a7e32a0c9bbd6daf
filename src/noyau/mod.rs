//! Noyau de la calculatrice (headless)
//!
//! Organisation interne :
//! - erreur.rs       : ErreurEval (toutes les causes d'échec d'évaluation)
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard + repli f64
//! - eval.rs         : pipeline complet
//! - format.rs       : nombre -> forme décimale naturelle
//! - accumulateur.rs : état deux-chaînes + commandes (le contrat de la vue)

pub mod accumulateur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::{Accumulateur, Commande, FonctionUnaire, Operateur, JETON_ERREUR};
pub use erreur::ErreurEval;
pub use eval::eval_expression;
