// src/lib.rs
//
// Calculatrice Z-pur — noyau seul (bibliothèque)
// ----------------------------------------------
// But:
// - évaluer une expression arithmétique ENTIÈRE en un seul passage
//   (validation de syntaxe + calcul ensemble, gauche → droite)
// - parenthèses comme seul groupement (aucune précédence * / sur + -)
// - aucun environnement autour : pas d'interface, pas d'E/S, pas d'état

pub mod noyau;

pub use noyau::eval_expression;
