//! Letter and word vector encodings.

use std::f64::consts::TAU;

use symphi_types::{Letter, LetterVector, Word};

use crate::classify::classify;
use crate::energy::energy;

/// Encode a letter as `(energy, sin, cos, class ordinal)` with the
/// trigonometric pair at angle `2π · index / 26`.
pub fn encode(letter: Letter) -> LetterVector {
    let angle = TAU * f64::from(letter.index()) / 26.0;
    LetterVector {
        energy: energy(letter),
        flow_sin: angle.sin(),
        flow_cos: angle.cos(),
        class_ordinal: classify(letter).ordinal(),
    }
}

/// Encode a word as one vector per letter, in original order.
pub fn encode_word(word: &Word) -> Vec<LetterVector> {
    word.iter().map(encode).collect()
}
