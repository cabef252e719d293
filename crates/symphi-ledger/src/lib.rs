//! # symphi-ledger
//!
//! Hash-chained, append-only record of conservation checks.
//!
//! Each entry carries a BLAKE3 fingerprint over a canonical encoding of
//! its fields plus the previous entry's fingerprint, so any mutation of a
//! stored entry, and any reordering, is detectable by a full-chain walk.
//! Appends are serialized behind a write lock: each fingerprint depends
//! on the chain head, which makes ordering a correctness invariant.

#![deny(unsafe_code)]

pub mod entry;
pub mod error;

use std::sync::RwLock;

use symphi_core::ConservationCheck;
use tracing::debug;

pub use entry::{Fingerprint, LedgerEntry, GENESIS_FINGERPRINT};
pub use error::LedgerError;

struct ChainState {
    entries: Vec<LedgerEntry>,
    head: Fingerprint,
}

/// The append-only conservation ledger.
///
/// Starts empty with the head at [`GENESIS_FINGERPRINT`]. `append` is the
/// only mutator and either fully succeeds or leaves the chain untouched.
pub struct TransformLedger {
    inner: RwLock<ChainState>,
}

impl TransformLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ChainState {
                entries: Vec::new(),
                head: GENESIS_FINGERPRINT,
            }),
        }
    }

    /// Append a completed check as a new chained entry.
    pub fn append(&self, check: &ConservationCheck) -> Result<LedgerEntry, LedgerError> {
        let mut state = self.inner.write().map_err(|_| LedgerError::Lock)?;
        let entry = LedgerEntry::from_check(check, state.head);
        state.head = entry.fingerprint;
        state.entries.push(entry.clone());
        debug!(
            seq = state.entries.len(),
            strategy = %entry.strategy,
            verdict = %entry.verdict,
            fingerprint = %entry.short_fingerprint(),
            "appended ledger entry"
        );
        Ok(entry)
    }

    /// Walk the chain first-to-last, recomputing every fingerprint and
    /// checking every previous-fingerprint link against the predecessor.
    pub fn verify(&self) -> Result<(), LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::Lock)?;
        verify_chain(&state.entries)
    }

    /// Fingerprint of the last entry, or the genesis constant when empty.
    pub fn head(&self) -> Result<Fingerprint, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::Lock)?;
        Ok(state.head)
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Result<Vec<LedgerEntry>, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::Lock)?;
        Ok(state.entries.clone())
    }

    pub fn len(&self) -> Result<usize, LedgerError> {
        let state = self.inner.read().map_err(|_| LedgerError::Lock)?;
        Ok(state.entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl Default for TransformLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify a standalone sequence of entries as a well-formed chain.
///
/// Fails on the first mismatch: a recomputed fingerprint that differs
/// from the stored one, or a previous-fingerprint link that does not
/// reference the predecessor (the first entry must reference genesis).
pub fn verify_chain(entries: &[LedgerEntry]) -> Result<(), LedgerError> {
    let mut expected_previous = GENESIS_FINGERPRINT;
    for (index, entry) in entries.iter().enumerate() {
        if entry.previous_fingerprint != expected_previous {
            return Err(LedgerError::IntegrityViolation {
                index,
                reason: "previous fingerprint link mismatch".to_string(),
            });
        }
        if !entry.verify_fingerprint() {
            return Err(LedgerError::IntegrityViolation {
                index,
                reason: "fingerprint does not match stored fields".to_string(),
            });
        }
        expected_previous = entry.fingerprint;
    }
    Ok(())
}
