// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    Plus,
    Moins,
    Fois,
    Divise,

    // Moins préfixe (négation). Jamais produit par tokenize : c'est
    // to_rpn qui reclasse un Moins en MoinsUnaire quand aucune valeur
    // ne le précède.
    MoinsUnaire,

    ParG,
    ParD,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5, .5) — un littéral imprononçable
///   pour f64 (ex: "1.2.3") est rejeté en NombreInvalide
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Tout autre caractère est une erreur typée (jamais de panique).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Divise);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : chiffres et points, d'un seul tenant.
        // NOTE: on accepte plusieurs points à la lecture (saisie permissive),
        // c'est parse::<f64> qui tranche — "1.2.3" => NombreInvalide.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let n = lit
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(lit.clone()))?;

            out.push(Jeton::Nombre(n));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}
