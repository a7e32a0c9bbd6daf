// src/noyau/erreur.rs
//
// Erreur unique du noyau : tout ce qui empêche de réduire un texte en nombre.
//
// Contrat :
// - Aucune de ces erreurs ne traverse la frontière de l'accumulateur :
//   elles sont toutes absorbées en jeton d'affichage (voir accumulateur.rs).
// - Les variantes distinguent les causes (syntaxe, division par zéro, racine
//   négative…) même si l'affichage final reste uniforme.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée d'un nombre négatif")]
    RacineNegative,

    #[error("résultat hors domaine")]
    HorsDomaine,
}
