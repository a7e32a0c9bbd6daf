//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> repli f64 -> garde-fou fini
//!
//! Remplace l'« eval » générique de l'hôte par un pipeline explicite :
//! pas d'exécution dynamique de code, un domaine fermé (+ - * /, littéraux,
//! parenthèses), et des erreurs typées qui ne paniquent jamais.

use super::erreur::ErreurEval;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue un texte arithmétique et retourne sa valeur.
///
/// - Entrée vide (après trim) => ErreurEval::EntreeVide
/// - Résultat non fini (débordement) => ErreurEval::HorsDomaine
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Repli
    let v = eval_rpn(&rpn)?;

    // 4) Garde-fou : un débordement f64 (inf/NaN) n'est pas un résultat.
    if !v.is_finite() {
        return Err(ErreurEval::HorsDomaine);
    }

    Ok(v)
}
