//! # symphi-core
//!
//! The pure computational pipeline of SymPhi: symmetry classification,
//! the energy model, the 4-dimensional vector encoding, the four
//! transformation strategies, and the conservation checker.
//!
//! Everything in this crate is deterministic and side-effect-free. The
//! classification table and per-class constants are process-wide,
//! immutable data; concurrent readers need no synchronization.

#![deny(unsafe_code)]

pub mod classify;
pub mod conservation;
pub mod energy;
pub mod strategy;
pub mod vectorize;

pub use classify::{class_params, classify, representative, ClassParams};
pub use conservation::{ConservationCheck, ConservationChecker, DEFAULT_TOLERANCE};
pub use energy::{energy, total_energy};
pub use strategy::Strategy;
pub use vectorize::{encode, encode_word};
