//! Noyau — évaluation (pipeline réel)
//!
//! canonise -> équilibre -> analyse gauche→droite (un seul passage)
//!
//! Remarque : la validation de syntaxe et le calcul se font ENSEMBLE dans
//! analyse.rs; l'équilibre des parenthèses reste une pré-passe structurelle
//! bon marché, exécutée une seule fois avant toute sémantique.

use num_bigint::BigInt;

use super::analyse::analyse_expression;
use super::canon::canonise;
use super::equilibre::verifie_equilibre;

/// API publique : évalue une expression arithmétique entière.
///
/// - entiers signés exacts (big int), + - * /, parenthèses, signe unaire
///   devant un groupe parenthésé
/// - évaluation STRICTEMENT gauche→droite (aucune précédence * / sur + -)
/// - division entière tronquée vers zéro; division par zéro => Err
/// - toute entrée malformée => Err à la première faute, sans reprise
pub fn eval_expression(entree: &str) -> Result<BigInt, String> {
    // 1) Entrée canonique (blancs retirés, alphabet strict)
    let s = canonise(entree)?;
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 2) Équilibre des parenthèses (pré-passe)
    verifie_equilibre(&s)?;

    // 3) Analyse + évaluation en un seul passage
    analyse_expression(&s)
}
