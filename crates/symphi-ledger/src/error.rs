use thiserror::Error;

/// Ledger-related errors.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A fingerprint or chain link did not match what the stored fields
    /// require. Fatal to trust in the ledger; never retried.
    #[error("ledger integrity violation at entry {index}: {reason}")]
    IntegrityViolation { index: usize, reason: String },

    /// The interior lock was poisoned by a panicking writer.
    #[error("ledger lock poisoned")]
    Lock,
}
