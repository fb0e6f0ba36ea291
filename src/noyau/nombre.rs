// src/noyau/nombre.rs
//
// Entier signé : signe optionnel (+/-) puis UN chiffre ou plus.
// - le signe lu ici est le signe littéral d'un nombre, PAS le signe
//   unaire devant un groupe parenthésé (géré un niveau au-dessus,
//   dans analyse.rs)
// - jamais de récursion, jamais de regard sur opérateurs/parenthèses

use num_bigint::BigInt;

/// Lit un entier signé à partir de `depart` dans l'entrée canonique.
///
/// Retour: (valeur, position suivante). Le curseur retourné a TOUJOURS
/// strictement avancé en cas de succès.
pub fn lire_nombre(s: &[char], depart: usize) -> Result<(BigInt, usize), String> {
    let n = s.len();
    let mut i = depart;

    if i >= n {
        return Err("nombre attendu en fin d'entrée".into());
    }

    // Signe optionnel
    let mut negatif = false;
    if s[i] == '+' || s[i] == '-' {
        negatif = s[i] == '-';
        i += 1;
        if i >= n {
            // un signe ne peut pas clore l'entrée
            return Err("signe sans opérande".into());
        }
    }

    // Un chiffre ou plus (la faute est signalée APRÈS le signe consommé)
    let debut = i;
    while i < n && s[i].is_ascii_digit() {
        i += 1;
    }
    if i == debut {
        return Err(format!("chiffre attendu (position {debut})"));
    }

    let chiffres: String = s[debut..i].iter().collect();
    let mut valeur = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or("nombre invalide")?;
    if negatif {
        valeur = -valeur;
    }

    Ok((valeur, i))
}
