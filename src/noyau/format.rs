// src/noyau/format.rs

/// Forme décimale naturelle d'un f64.
///
/// On s'appuie sur le Display de Rust (aller-retour le plus court) :
/// - 7.0      -> "7"
/// - 0.5      -> "0.5"
/// - sqrt(2)  -> "1.4142135623730951"
///
/// Cas particulier : -0.0 est normalisé en "0" (personne ne tape "moins zéro").
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
