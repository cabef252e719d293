//! The transformation strategies (morphisms).
//!
//! The strategy set is closed: four variants, selected by name at the
//! boundary. Unknown names are a configuration error and are rejected
//! before any energy computation happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use symphi_types::{Letter, SymphiError, Word};

use crate::classify::{classify, representative};

/// A deterministic word-to-word transformation.
///
/// `Mirror`, `PairwiseRotate`, and `Interleave` are pure index
/// permutations, so they conserve total energy exactly.
/// `SymmetryStabilize` collapses each letter onto its class
/// representative and is the one strategy that can drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Mirror,
    PairwiseRotate,
    Interleave,
    SymmetryStabilize,
}

impl Strategy {
    /// All strategies, in the stable listing order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Mirror,
        Strategy::PairwiseRotate,
        Strategy::Interleave,
        Strategy::SymmetryStabilize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Mirror => "mirror",
            Strategy::PairwiseRotate => "pairwise_rotate",
            Strategy::Interleave => "interleave",
            Strategy::SymmetryStabilize => "symmetry_stabilize",
        }
    }

    /// Ordinal used in canonical ledger encodings. Fixed forever.
    pub fn ordinal(&self) -> u8 {
        match self {
            Strategy::Mirror => 0,
            Strategy::PairwiseRotate => 1,
            Strategy::Interleave => 2,
            Strategy::SymmetryStabilize => 3,
        }
    }

    /// Resolve a strategy by name.
    pub fn from_name(name: &str) -> Result<Self, SymphiError> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| SymphiError::UnknownStrategy(name.to_string()))
    }

    /// Apply the transformation. Total over non-empty words; the input is
    /// never mutated.
    pub fn apply(&self, word: &Word) -> Word {
        let letters = word.letters();
        let transformed = match self {
            Strategy::Mirror => letters.iter().rev().copied().collect(),
            Strategy::PairwiseRotate => pairwise_rotate(letters),
            Strategy::Interleave => interleave(letters),
            Strategy::SymmetryStabilize => letters
                .iter()
                .map(|&letter| representative(classify(letter)))
                .collect(),
        };
        Word::from_letters(transformed)
    }
}

/// Swap each adjacent pair; a trailing unpaired letter stays in place.
fn pairwise_rotate(letters: &[Letter]) -> Vec<Letter> {
    let mut out = letters.to_vec();
    for pair in out.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
    out
}

/// Emit the odd-indexed half followed by the even-indexed half.
fn interleave(letters: &[Letter]) -> Vec<Letter> {
    let odd = letters.iter().skip(1).step_by(2);
    let even = letters.iter().step_by(2);
    odd.chain(even).copied().collect()
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SymphiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
