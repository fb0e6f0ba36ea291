// src/noyau/analyse.rs
//
// Analyse gauche→droite + évaluation en UN SEUL passage.
// ------------------------------------------------------
// Machine à deux états par niveau de nidification :
// - ATTEND OPÉRANDE  : nombre, '(' ou signe unaire collé à '(' / à un nombre
// - ATTEND OPÉRATEUR : + - * /, ou ')' qui clôt le niveau courant
//
// Nidification via pile EXPLICITE de cadres (pas de récursion native) :
// une entrée adversariale très profondément parenthésée coûte du tas,
// jamais la pile d'appels.
//
// AUCUNE précédence : 1+3*4 = (1+3)*4 = 16. Les parenthèses sont le
// seul groupement. La structure n'est jamais matérialisée (pas d'AST) :
// chaque opérande est consommé dès qu'il est lu.

use num_bigint::BigInt;

use super::arith::{applique_op, Op};
use super::nombre::lire_nombre;

/// Un cadre = un niveau de nidification (niveau racine inclus).
struct Cadre {
    /// Valeur accumulée du niveau (None tant qu'aucun opérande lu).
    acc: Option<BigInt>,
    /// Opérateur en attente de son opérande droit.
    op: Option<Op>,
    /// true = ATTEND OPÉRANDE, false = ATTEND OPÉRATEUR/FERMANTE.
    attend_operande: bool,
    /// Signe unaire porté par le groupe : « -(…) » négate le résultat.
    negatif: bool,
}

impl Cadre {
    fn nouveau(negatif: bool) -> Self {
        Cadre {
            acc: None,
            op: None,
            attend_operande: true,
            negatif,
        }
    }

    /// Absorbe un opérande : le premier est copié tel quel, les suivants
    /// passent par l'opérateur en attente. Toute faute arithmétique
    /// (division par zéro) avorte l'analyse entière.
    fn absorbe(&mut self, v: BigInt) -> Result<(), String> {
        self.acc = Some(match self.acc.take() {
            None => v,
            Some(a) => {
                let op = self.op.ok_or("opérande sans opérateur")?;
                applique_op(a, op, v)?
            }
        });
        self.attend_operande = false;
        Ok(())
    }
}

/// Analyse et évalue l'entrée canonique.
///
/// L'équilibre GLOBAL des parenthèses est déjà vérifié en amont
/// (equilibre.rs); la validité LOCALE de chaque ')' reste contrôlée ici.
pub fn analyse_expression(s: &[char]) -> Result<BigInt, String> {
    let n = s.len();

    // Niveau courant + niveaux suspendus (parents en attente de leur ')')
    let mut courant = Cadre::nouveau(false);
    let mut parents: Vec<Cadre> = Vec::new();

    let mut i: usize = 0;
    while i < n {
        let c = s[i];

        if courant.attend_operande {
            if (c == '+' || c == '-') && i + 1 < n && s[i + 1] == '(' {
                // Groupe signé : +(…) est neutre, -(…) négate le groupe.
                // Le niveau courant est suspendu jusqu'à la ')' du groupe.
                parents.push(courant);
                courant = Cadre::nouveau(c == '-');
                i += 2;
            } else if c == '(' {
                parents.push(courant);
                courant = Cadre::nouveau(false);
                i += 1;
            } else if c.is_ascii_digit() || c == '+' || c == '-' {
                // Signe littéral + chiffres (nombre.rs ne regarde jamais
                // les parenthèses)
                let (v, suite) = lire_nombre(s, i)?;
                courant.absorbe(v)?;
                i = suite;
            } else {
                // ')' alors qu'un opérande est attendu : "()" n'est
                // jamais un groupe vide valide
                return Err(format!("opérande attendu (position {i})"));
            }
        } else if let Some(op) = Op::depuis(c) {
            courant.op = Some(op);
            courant.attend_operande = true;
            i += 1;
        } else if c == ')' {
            let parent = match parents.pop() {
                Some(p) => p,
                // fermante au niveau racine : hors contexte local,
                // même si le solde global est nul
                None => {
                    return Err(format!("parenthèse fermante sans ouvrante (position {i})"))
                }
            };

            // Le niveau se clôt en état ATTEND OPÉRATEUR : il porte
            // forcément une valeur, sans opérateur pendant.
            let fini = courant;
            courant = parent;

            let mut v = fini.acc.ok_or("groupe vide")?;
            if fini.negatif {
                v = -v;
            }
            courant.absorbe(v)?;
            i += 1;
        } else {
            return Err(format!("opérateur ou fermante attendu (position {i})"));
        }
    }

    // Fin d'entrée
    if !parents.is_empty() {
        return Err("parenthèses non fermées".into());
    }
    if courant.attend_operande {
        // entrée vide, ou opérateur pendant ("1+")
        return Err("entrée vide ou opérateur pendant".into());
    }
    courant.acc.ok_or_else(|| "entrée vide".into())
}
