//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau et l'accumulateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur et longueur bornées
//! - budget temps global
//! - invariants clés :
//!   * eval_expression ne panique jamais (tout échec est une ErreurEval)
//!   * l'affichage courant ne dépasse jamais LARGEUR_AFFICHAGE caractères
//!   * "=" vide toujours l'expression en attente, succès ou échec
//!   * C vide toujours tout

use std::time::{Duration, Instant};

use super::accumulateur::{
    Accumulateur, Commande, FonctionUnaire, Operateur, LARGEUR_AFFICHAGE,
};
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits littéraux, incluant 0 (utile pour provoquer des divisions par zéro)
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-({})", gen_expr(rng, depth - 1)),
        // opérande signé SANS parenthèses (ce que produit le pavé : "2*-3")
        _ => {
            let op = ['+', '-', '*', '/'][rng.pick(4) as usize];
            format!("({}{op}-{})", gen_expr(rng, depth - 1), gen_nombre(rng))
        }
    }
}

/* ------------------------ Génération de commandes ------------------------ */

fn gen_commande(rng: &mut Rng) -> Commande {
    match rng.pick(10) {
        // majorité de chiffres, pour construire de vrais jetons
        0..=4 => {
            let c = match rng.pick(11) {
                10 => '.',
                d => char::from_digit(d, 10).unwrap_or('0'),
            };
            Commande::Chiffre(c)
        }
        5 | 6 => {
            let op = match rng.pick(4) {
                0 => Operateur::Plus,
                1 => Operateur::Moins,
                2 => Operateur::Fois,
                _ => Operateur::Divise,
            };
            Commande::Operateur(op)
        }
        7 => {
            let f = match rng.pick(3) {
                0 => FonctionUnaire::Carre,
                1 => FonctionUnaire::RacineCarree,
                _ => FonctionUnaire::FoisPi,
            };
            Commande::Unaire(f)
        }
        8 => Commande::Egal,
        _ => Commande::Effacer,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_total_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        // Deux passes : même entrée, même sortie.
        let a = eval_expression(&expr);
        let b = eval_expression(&expr);
        assert_eq!(a, b, "non-déterminisme sur {expr:?}");

        match a {
            Ok(v) => {
                assert!(v.is_finite(), "résultat non fini laissé passer: {expr:?}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_commandes_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut a = Accumulateur::nouveau();
        let longueur = 5 + rng.pick(35) as usize;

        for _ in 0..longueur {
            let cmd = gen_commande(&mut rng);
            a.appliquer(cmd);

            // Invariant : troncature d'affichage jamais dépassée.
            assert!(
                a.affichage_courant().chars().count() <= LARGEUR_AFFICHAGE,
                "affichage courant trop long après {cmd:?}"
            );

            match cmd {
                // Invariant : "=" vide l'attente, succès ou échec.
                Commande::Egal => assert_eq!(a.affichage_attente(), ""),
                // Invariant : C vide tout.
                Commande::Effacer => {
                    assert_eq!(a.affichage_attente(), "");
                    assert_eq!(a.affichage_courant(), "");
                }
                _ => {}
            }
        }
    }
}

#[test]
fn fuzz_safe_sequences_rejouables() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // Même seed, même séquence de commandes => mêmes affichages finaux.
    let rejouer = |seed: u64| -> (String, String) {
        let mut rng = Rng::new(seed);
        let mut a = Accumulateur::nouveau();
        for _ in 0..60 {
            a.appliquer(gen_commande(&mut rng));
        }
        (a.affichage_attente().to_string(), a.affichage_courant())
    };

    for seed in [1u64, 42, 0xDEAD_BEEF] {
        budget(t0, max);
        assert_eq!(rejouer(seed), rejouer(seed), "seed {seed} non rejouable");
    }
}
