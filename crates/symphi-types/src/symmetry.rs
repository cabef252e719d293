use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual-symmetry classification of a letter.
///
/// Ordinals are fixed and participate in vector encodings and ledger
/// fingerprints, so the variant order must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymmetryClass {
    /// Invariant under both vertical and horizontal mirroring.
    Idempotent,
    /// Invariant under a single mirror axis only.
    Biphasic,
    /// Maps to a different letter under 180-degree rotation, and back
    /// when the rotation is applied twice (an order-2 pairing).
    Involutive,
    /// No mirror or rotational symmetry.
    Asymmetric,
}

impl SymmetryClass {
    /// All classes in ordinal order.
    pub const ALL: [SymmetryClass; 4] = [
        SymmetryClass::Idempotent,
        SymmetryClass::Biphasic,
        SymmetryClass::Involutive,
        SymmetryClass::Asymmetric,
    ];

    pub fn ordinal(&self) -> u8 {
        match self {
            SymmetryClass::Idempotent => 0,
            SymmetryClass::Biphasic => 1,
            SymmetryClass::Involutive => 2,
            SymmetryClass::Asymmetric => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymmetryClass::Idempotent => "idempotent",
            SymmetryClass::Biphasic => "biphasic",
            SymmetryClass::Involutive => "involutive",
            SymmetryClass::Asymmetric => "asymmetric",
        }
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a conservation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Energy drift stayed within tolerance.
    Conserved,
    /// Energy drift exceeded tolerance.
    Violated,
}

impl Verdict {
    pub fn is_conserved(&self) -> bool {
        matches!(self, Verdict::Conserved)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Conserved => f.write_str("conserved"),
            Verdict::Violated => f.write_str("violated"),
        }
    }
}
