// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> repli f64
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis replier la RPN sur une pile de f64
//
// Règles:
// - Précédence: {+, -} < {*, /} < moins unaire, binaires associatifs à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient MoinsUnaire,
//      un opérateur préfixe à un opérande qui s'empile sans rien dépiler
//      (préfixe = il reste collé à son opérande : "2*-3" => "2 3 ± *")
// - Division: diviseur nul => erreur typée (jamais d'infini silencieux)

use super::erreur::ErreurEval;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Divise => 2,
        Jeton::MoinsUnaire => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(2), Plus, Nombre(3), Fois, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Fois, Plus]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => {
                out.push(jeton);
                prev_was_value = true;
            }

            Jeton::ParG => {
                ops.push(jeton);
                prev_was_value = false;
            }

            Jeton::ParD => {
                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Jeton::ParG) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::ExpressionInvalide);
                }

                prev_was_value = true;
            }

            Jeton::Plus | Jeton::Fois | Jeton::Divise => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Jeton::ParG) {
                        break;
                    }
                    if precedence(top) >= precedence(&jeton) {
                        let op = ops.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                        out.push(op);
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
                prev_was_value = false;
            }

            Jeton::Moins => {
                // moins unaire : pas de valeur avant => négation préfixe.
                // Un préfixe s'empile sans dépiler, sinon l'opérateur en
                // attente viendrait se glisser entre lui et son opérande.
                if !prev_was_value {
                    ops.push(Jeton::MoinsUnaire);
                    continue;
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Jeton::ParG) {
                        break;
                    }
                    if precedence(top) >= precedence(&Jeton::Moins) {
                        let op = ops.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                        out.push(op);
                    } else {
                        break;
                    }
                }

                ops.push(Jeton::Moins);
                prev_was_value = false;
            }

            // Jamais émis par tokenize ; si une RPN re-rentrait ici, on
            // le replace tel quel sur la pile.
            Jeton::MoinsUnaire => {
                ops.push(Jeton::MoinsUnaire);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Replie une RPN sur une pile de f64.
///
/// - Nombre: empilé tel quel
/// - Opérateur binaire: dépile b puis a, empile a op b
/// - MoinsUnaire: dépile un opérande, empile son opposé
/// - Division par zéro: erreur typée
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(n) => st.push(*n),

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Divise => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match jeton {
                    Jeton::Plus => a + b,
                    Jeton::Moins => a - b,
                    Jeton::Fois => a * b,
                    Jeton::Divise => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                    _ => return Err(ErreurEval::ExpressionInvalide),
                };

                st.push(v);
            }

            Jeton::MoinsUnaire => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-b);
            }

            Jeton::ParG | Jeton::ParD => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    st.pop().ok_or(ErreurEval::ExpressionInvalide)
}
