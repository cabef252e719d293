//! Ledger entry and its canonical fingerprint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use symphi_core::{ConservationCheck, Strategy};
use symphi_types::{Verdict, Word};
use uuid::Uuid;

/// BLAKE3 fingerprint of a ledger entry.
pub type Fingerprint = [u8; 32];

/// Previous-fingerprint value of the first entry in a chain.
pub const GENESIS_FINGERPRINT: Fingerprint = [0u8; 32];

/// Domain-separation prefix for entry fingerprints.
const FINGERPRINT_PREFIX: &[u8] = b"symphi-entry-v1:";

/// One recorded conservation check, chained to its predecessor.
///
/// The fingerprint covers the previous fingerprint and every check field
/// through a byte-exact canonical encoding, so identical ledger history
/// plus identical input always reproduces the identical chain. `id` and
/// `recorded_at` are audit metadata and deliberately excluded from it.
/// Entries are immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry id.
    pub id: Uuid,
    /// Wall-clock append time.
    pub recorded_at: DateTime<Utc>,
    /// Word the check started from.
    pub input: Word,
    /// Strategy that was applied.
    pub strategy: Strategy,
    /// Word the strategy produced.
    pub transformed: Word,
    /// Total energy before the transformation.
    pub pre_energy: f64,
    /// Total energy after the transformation.
    pub post_energy: f64,
    /// Absolute energy drift.
    pub drift: f64,
    /// Conservation verdict.
    pub verdict: Verdict,
    /// Fingerprint of the preceding entry, or [`GENESIS_FINGERPRINT`].
    pub previous_fingerprint: Fingerprint,
    /// Fingerprint of this entry.
    pub fingerprint: Fingerprint,
}

impl LedgerEntry {
    /// Build an entry from a completed check, chained onto `previous`.
    pub fn from_check(check: &ConservationCheck, previous: Fingerprint) -> Self {
        let fingerprint = compute_fingerprint(
            &previous,
            &check.input,
            check.strategy,
            &check.transformed,
            check.pre_energy,
            check.post_energy,
            check.drift,
            check.verdict,
        );
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            input: check.input.clone(),
            strategy: check.strategy,
            transformed: check.transformed.clone(),
            pre_energy: check.pre_energy,
            post_energy: check.post_energy,
            drift: check.drift,
            verdict: check.verdict,
            previous_fingerprint: previous,
            fingerprint,
        }
    }

    /// Recompute the fingerprint from the stored fields.
    pub fn expected_fingerprint(&self) -> Fingerprint {
        compute_fingerprint(
            &self.previous_fingerprint,
            &self.input,
            self.strategy,
            &self.transformed,
            self.pre_energy,
            self.post_energy,
            self.drift,
            self.verdict,
        )
    }

    /// Whether the stored fingerprint matches the stored fields.
    pub fn verify_fingerprint(&self) -> bool {
        self.expected_fingerprint() == self.fingerprint
    }

    /// Full fingerprint in hex.
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Short display form (first 8 bytes hex).
    pub fn short_fingerprint(&self) -> String {
        hex::encode(&self.fingerprint[..8])
    }
}

/// Canonical, order-preserving encoding of the fingerprinted fields.
///
/// Words are length-framed letter indices, energies are IEEE-754 bit
/// patterns, integers are little-endian. Any change here is a chain
/// format break and requires a new domain prefix.
#[allow(clippy::too_many_arguments)]
fn compute_fingerprint(
    previous: &Fingerprint,
    input: &Word,
    strategy: Strategy,
    transformed: &Word,
    pre_energy: f64,
    post_energy: f64,
    drift: f64,
    verdict: Verdict,
) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();
    hasher.update(FINGERPRINT_PREFIX);
    hasher.update(previous);
    hash_word(&mut hasher, input);
    hasher.update(&[strategy.ordinal()]);
    hash_word(&mut hasher, transformed);
    hasher.update(&pre_energy.to_bits().to_le_bytes());
    hasher.update(&post_energy.to_bits().to_le_bytes());
    hasher.update(&drift.to_bits().to_le_bytes());
    let verdict_byte = match verdict {
        Verdict::Conserved => 0u8,
        Verdict::Violated => 1,
    };
    hasher.update(&[verdict_byte]);
    *hasher.finalize().as_bytes()
}

fn hash_word(hasher: &mut blake3::Hasher, word: &Word) {
    let len = word.len() as u32;
    hasher.update(&len.to_le_bytes());
    for letter in word.iter() {
        hasher.update(&[letter.index()]);
    }
}

#[cfg(test)]
mod tests {
    use symphi_core::ConservationChecker;

    use super::*;

    fn check(word: &str, strategy: Strategy) -> ConservationCheck {
        ConservationChecker::default().check(&Word::parse(word).unwrap(), strategy)
    }

    #[test]
    fn fingerprint_is_reproducible() {
        let entry = LedgerEntry::from_check(&check("AB", Strategy::Mirror), GENESIS_FINGERPRINT);
        assert!(entry.verify_fingerprint());

        // Metadata differs, fingerprint does not.
        let again = LedgerEntry::from_check(&check("AB", Strategy::Mirror), GENESIS_FINGERPRINT);
        assert_ne!(entry.id, again.id);
        assert_eq!(entry.fingerprint, again.fingerprint);
    }

    #[test]
    fn fingerprint_binds_the_previous_link() {
        let genesis = LedgerEntry::from_check(&check("AB", Strategy::Mirror), GENESIS_FINGERPRINT);
        let chained = LedgerEntry::from_check(&check("AB", Strategy::Mirror), genesis.fingerprint);
        assert_ne!(genesis.fingerprint, chained.fingerprint);
    }

    #[test]
    fn tampering_with_any_check_field_breaks_verification() {
        let base = LedgerEntry::from_check(&check("SQ", Strategy::SymmetryStabilize), GENESIS_FINGERPRINT);

        let mut tampered = base.clone();
        tampered.input = Word::parse("SO").unwrap();
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.strategy = Strategy::Mirror;
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.transformed = Word::parse("SS").unwrap();
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.pre_energy += 1.0;
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.post_energy += 1.0;
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.drift = 0.0;
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.verdict = Verdict::Conserved;
        assert!(!tampered.verify_fingerprint());

        let mut tampered = base.clone();
        tampered.previous_fingerprint = [7u8; 32];
        assert!(!tampered.verify_fingerprint());
    }

    #[test]
    fn entries_serialize_to_json() {
        let entry = LedgerEntry::from_check(&check("AB", Strategy::Mirror), GENESIS_FINGERPRINT);
        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
