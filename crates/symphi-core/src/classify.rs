//! Static symmetry classification of the 26 letters.

use symphi_types::SymmetryClass::{Asymmetric, Biphasic, Idempotent, Involutive};
use symphi_types::{Letter, SymmetryClass};

/// Class per letter, indexed by alphabetic index.
///
/// Membership follows the symmetry handbook tables:
/// idempotent AHIMOTUVWXY, biphasic BCDEK, involutive NSZ,
/// asymmetric FGJLPQR.
const CLASS_TABLE: [SymmetryClass; 26] = [
    Idempotent, // A
    Biphasic,   // B
    Biphasic,   // C
    Biphasic,   // D
    Biphasic,   // E
    Asymmetric, // F
    Asymmetric, // G
    Idempotent, // H
    Idempotent, // I
    Asymmetric, // J
    Biphasic,   // K
    Asymmetric, // L
    Idempotent, // M
    Involutive, // N
    Idempotent, // O
    Asymmetric, // P
    Asymmetric, // Q
    Asymmetric, // R
    Involutive, // S
    Idempotent, // T
    Idempotent, // U
    Idempotent, // V
    Idempotent, // W
    Idempotent, // X
    Idempotent, // Y
    Involutive, // Z
];

/// Fixed constants attached to a symmetry class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassParams {
    /// Multiplicative factor on the one-based alphabetic position.
    pub weight: f64,
    /// Additive term.
    pub offset: f64,
    /// Canonical representative letter for stabilization.
    pub representative: Letter,
}

/// Classify a letter. Total over all 26 letters; case-insensitivity is
/// handled by [`Letter`] normalization.
pub fn classify(letter: Letter) -> SymmetryClass {
    CLASS_TABLE[letter.index() as usize]
}

/// Constants for a class. Fixed at compile time, never mutated.
pub fn class_params(class: SymmetryClass) -> ClassParams {
    match class {
        SymmetryClass::Idempotent => ClassParams {
            weight: 1.0,
            offset: 0.0,
            representative: Letter::from_ascii_upper(b'O'),
        },
        SymmetryClass::Biphasic => ClassParams {
            weight: 0.5,
            offset: 2.0,
            representative: Letter::from_ascii_upper(b'B'),
        },
        SymmetryClass::Involutive => ClassParams {
            weight: 0.25,
            offset: 4.0,
            representative: Letter::from_ascii_upper(b'S'),
        },
        SymmetryClass::Asymmetric => ClassParams {
            weight: 1.5,
            offset: 1.0,
            representative: Letter::from_ascii_upper(b'F'),
        },
    }
}

/// Canonical representative letter of a class.
pub fn representative(class: SymmetryClass) -> Letter {
    class_params(class).representative
}
