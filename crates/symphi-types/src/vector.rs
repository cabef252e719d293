use serde::{Deserialize, Serialize};

/// 4-component encoding of a single letter.
///
/// The trigonometric components place the letter on the unit circle at
/// angle `2π · index / 26` (the implication-flow coordinates); the class
/// ordinal pins its symmetry class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LetterVector {
    pub energy: f64,
    pub flow_sin: f64,
    pub flow_cos: f64,
    pub class_ordinal: u8,
}

impl LetterVector {
    /// The vector as a flat array, class ordinal widened to `f64`.
    pub fn components(&self) -> [f64; 4] {
        [
            self.energy,
            self.flow_sin,
            self.flow_cos,
            f64::from(self.class_ordinal),
        ]
    }
}
