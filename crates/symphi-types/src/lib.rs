//! # symphi-types
//!
//! Shared domain types for the SymPhi conservation kernel.
//!
//! Everything here is a plain value type: letters normalized to an
//! alphabetic index, non-empty words, the four symmetry classes, the
//! per-letter 4-vector encoding, and conservation verdicts. Validation
//! happens at construction; once built, values are immutable.

#![deny(unsafe_code)]

pub mod errors;
pub mod letter;
pub mod symmetry;
pub mod vector;

pub use errors::SymphiError;
pub use letter::{Letter, Word};
pub use symmetry::{SymmetryClass, Verdict};
pub use vector::LetterVector;
