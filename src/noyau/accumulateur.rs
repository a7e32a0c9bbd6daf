//! Accumulateur d'expression — le cœur headless de la calculatrice.
//!
//! Deux chaînes, rien d'autre :
//! - `courante`   : le jeton en cours de frappe depuis le dernier commit
//! - `en_attente` : l'expression validée (couples opérande/opérateur)
//!
//! Contrats :
//! - L'expression logique complète vaut toujours `en_attente` + `courante`.
//! - `courante` ne contient jamais d'opérateur : un opérateur déclenche
//!   systématiquement un commit vers `en_attente`.
//! - `evaluer` vide `en_attente` inconditionnellement, succès ou échec
//!   (jamais de texte en attente périmé après un "=").
//! - Aucune erreur ne sort d'ici : tout échec d'évaluation devient le
//!   jeton d'affichage JETON_ERREUR.
//! - Aucun type UI : la vue ne fait que produire des `Commande` et relire
//!   les deux affichages.

use std::f64::consts::PI;

use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::format::format_nombre;

/// Largeur maximale de l'affichage courant (troncature de lecture seule).
pub const LARGEUR_AFFICHAGE: usize = 20;

/// Jeton affiché quand une évaluation échoue.
pub const JETON_ERREUR: &str = "Erreur";

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Caractère tel qu'il entre dans le texte de l'expression.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Glyphe d'affichage (cosmétique, jamais dans le texte évalué).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '−',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

/// Fonctions unaires : opèrent sur le jeton courant seulement,
/// jamais sur l'expression en attente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Carre,
    RacineCarree,
    FoisPi,
}

/// Une entrée utilisateur discrète (clic bouton ou touche clavier).
/// La vue ne mute jamais l'état directement : elle produit des commandes,
/// consommées de façon synchrone par `Accumulateur::appliquer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Operateur(Operateur),
    Unaire(FonctionUnaire),
    Effacer,
    Egal,
}

#[derive(Clone, Debug, Default)]
pub struct Accumulateur {
    courante: String,
    en_attente: String,
}

impl Accumulateur {
    pub fn nouveau() -> Self {
        Self::default()
    }

    /// Dispatch central : une commande = une transition d'état immédiate.
    pub fn appliquer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Chiffre(c) => self.ajouter_chiffre(c),
            Commande::Operateur(op) => self.ajouter_operateur(op),
            Commande::Unaire(f) => self.appliquer_unaire(f),
            Commande::Effacer => self.effacer(),
            Commande::Egal => self.evaluer(),
        }
    }

    /// Ajoute un chiffre (0-9) ou le point décimal au jeton courant.
    ///
    /// Permissif : un second point dans le même jeton est accepté ici et
    /// échouera à l'évaluation (comportement d'origine conservé).
    pub fn ajouter_chiffre(&mut self, c: char) {
        self.courante.push(c);
    }

    /// Commit : pousse l'opérateur sur le jeton courant, puis déplace le
    /// tout en fin d'expression en attente. Aucune arithmétique ici —
    /// tout est différé à l'évaluation finale.
    pub fn ajouter_operateur(&mut self, op: Operateur) {
        self.courante.push(op.symbole());
        self.en_attente.push_str(&self.courante);
        self.courante.clear();
    }

    /// C : remise à zéro des deux chaînes. Ne peut pas échouer.
    pub fn effacer(&mut self) {
        self.courante.clear();
        self.en_attente.clear();
    }

    /// Applique une fonction unaire au jeton courant (x², √x, x·π).
    ///
    /// Politique d'échec (jeton vide, texte invalide, racine d'un négatif,
    /// débordement) : même traitement que `evaluer` — le jeton courant
    /// devient JETON_ERREUR, rien ne remonte à l'appelant.
    pub fn appliquer_unaire(&mut self, f: FonctionUnaire) {
        let resultat = eval_expression(&self.courante).and_then(|x| {
            let v = match f {
                FonctionUnaire::Carre => x * x,
                FonctionUnaire::RacineCarree => {
                    if x < 0.0 {
                        return Err(ErreurEval::RacineNegative);
                    }
                    x.sqrt()
                }
                FonctionUnaire::FoisPi => x * PI,
            };
            if !v.is_finite() {
                return Err(ErreurEval::HorsDomaine);
            }
            Ok(v)
        });

        self.courante = match resultat {
            Ok(v) => format_nombre(v),
            Err(_) => JETON_ERREUR.to_string(),
        };
    }

    /// "=" : commit du jeton courant (même règle que l'opérateur), puis
    /// évaluation du texte complet.
    ///
    /// Succès : `courante` reçoit le résultat formaté.
    /// Échec  : `courante` reçoit JETON_ERREUR.
    /// Dans les deux cas `en_attente` est vidée — style finally, pour ne
    /// jamais laisser traîner du texte en attente après un "=".
    pub fn evaluer(&mut self) {
        self.en_attente.push_str(&self.courante);

        self.courante = match eval_expression(&self.en_attente) {
            Ok(v) => format_nombre(v),
            Err(_) => JETON_ERREUR.to_string(),
        };

        self.en_attente.clear();
    }

    /* ------------------------ Requêtes (lecture seule) ------------------------ */

    /// Expression en attente, telle quelle (les glyphes ÷ × sont l'affaire
    /// de la vue).
    pub fn affichage_attente(&self) -> &str {
        &self.en_attente
    }

    /// Jeton courant, tronqué aux LARGEUR_AFFICHAGE premiers caractères.
    /// Troncature d'affichage seulement : l'état n'est pas modifié.
    pub fn affichage_courant(&self) -> String {
        self.courante.chars().take(LARGEUR_AFFICHAGE).collect()
    }
}
