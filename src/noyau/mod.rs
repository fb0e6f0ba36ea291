//! Noyau exact Z-pur
//!
//! Organisation interne :
//! - canon.rs     : entrée canonique (blancs retirés, alphabet strict)
//! - equilibre.rs : pré-passe parenthèses (solde jamais négatif, nul à la fin)
//! - nombre.rs    : entier signé (signe optionnel + chiffres) -> BigInt
//! - arith.rs     : opérateurs + application (division tronquée vers zéro)
//! - analyse.rs   : machine à deux états, gauche→droite, pile de cadres
//! - eval.rs      : pipeline complet

pub mod analyse;
pub mod arith;
pub mod canon;
pub mod equilibre;
pub mod eval;
pub mod nombre;



// API publique minimale
pub use eval::eval_expression;
