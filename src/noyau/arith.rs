// src/noyau/arith.rs
//
// Opérateurs binaires + application.
// Division entière: quotient tronqué VERS ZÉRO (pas vers -∞): -7/2 = -3.
// C'est le comportement natif de BigInt; le contrat est figé ici et
// verrouillé par les tests.

use num_bigint::BigInt;
use num_traits::Zero;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    /// Reconnaît un opérateur binaire sur l'entrée canonique.
    pub fn depuis(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }
}

/// Applique `a op b`.
///
/// Seule faute possible: division par zéro — refus immédiat, jamais
/// rattrapé ni retenté plus haut.
pub fn applique_op(a: BigInt, op: Op, b: BigInt) -> Result<BigInt, String> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash => {
            if b.is_zero() {
                return Err("division par zéro".into());
            }
            Ok(a / b)
        }
    }
}
