//! The energy model.
//!
//! `energy(letter) = weight(class) * position + offset(class)` where
//! `position` is the one-based alphabetic index. A word's total energy is
//! the plain sum over its letters, so it depends only on the letter
//! multiset, never on order. That order-independence is the conservation
//! law the permutation strategies rely on.

use symphi_types::{Letter, Word};

use crate::classify::{class_params, classify};

/// Energy of a single letter. Pure and context-free.
pub fn energy(letter: Letter) -> f64 {
    let params = class_params(classify(letter));
    params.weight * f64::from(letter.position()) + params.offset
}

/// Total energy of a word: the sum of its letters' energies.
pub fn total_energy(word: &Word) -> f64 {
    word.iter().map(energy).sum()
}
