//! # symphi-engine
//!
//! Facade over the SymPhi pipeline for driver layers (CLI, services).
//!
//! The engine wires the pure core (classification, energy, vectors,
//! strategies, conservation checking) to the hash-chained ledger: every
//! checked transformation is appended as a fingerprinted entry, and the
//! whole chain can be audited at any time. The engine itself holds no
//! mutable state outside the ledger, so profiling and transformation
//! requests from concurrent callers need no external synchronization.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use symphi_core::{
    classify, encode_word, energy, total_energy, ConservationChecker, Strategy, DEFAULT_TOLERANCE,
};
use symphi_ledger::{LedgerError, LedgerEntry, TransformLedger};
use symphi_types::{LetterVector, SymmetryClass, SymphiError, Word};
use thiserror::Error;
use tracing::info;

/// Engine-level errors: domain failures at the input boundary, or ledger
/// failures while recording and auditing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] SymphiError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum acceptable absolute energy drift. Must be non-negative.
    pub tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Read-only symmetry profile of a word.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordProfile {
    pub word: Word,
    /// Symmetry class per letter, in word order.
    pub classes: Vec<SymmetryClass>,
    /// Energy per letter, in word order.
    pub energies: Vec<f64>,
    pub total_energy: f64,
    /// 4-vector per letter, in word order.
    pub vectors: Vec<LetterVector>,
    /// How many letters fall into each class.
    pub class_counts: BTreeMap<SymmetryClass, usize>,
}

/// The SymPhi engine: check-and-record transformations over one ledger.
pub struct Engine {
    checker: ConservationChecker,
    ledger: TransformLedger,
}

impl Engine {
    /// Engine with the default tolerance and a fresh, empty ledger.
    pub fn new() -> Self {
        Self {
            checker: ConservationChecker::default(),
            ledger: TransformLedger::new(),
        }
    }

    /// Engine with an explicit configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, SymphiError> {
        Ok(Self {
            checker: ConservationChecker::new(config.tolerance)?,
            ledger: TransformLedger::new(),
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.checker.tolerance()
    }

    /// Strategy identifiers, in the fixed listing order.
    pub fn list_strategies() -> Vec<&'static str> {
        Strategy::ALL.iter().map(Strategy::name).collect()
    }

    /// Inspect a word without touching the ledger.
    pub fn profile(&self, word: &str) -> Result<WordProfile, SymphiError> {
        let word = Word::parse(word)?;
        let classes: Vec<SymmetryClass> = word.iter().map(classify).collect();
        let energies: Vec<f64> = word.iter().map(energy).collect();
        let mut class_counts = BTreeMap::new();
        for class in &classes {
            *class_counts.entry(*class).or_insert(0) += 1;
        }
        Ok(WordProfile {
            total_energy: total_energy(&word),
            vectors: encode_word(&word),
            word,
            classes,
            energies,
            class_counts,
        })
    }

    /// Run the full pipeline once: resolve the strategy, parse the word,
    /// check conservation, and append the signed entry.
    ///
    /// The strategy name is validated before any energy computation, and
    /// nothing is appended on failure.
    pub fn transform(&self, word: &str, strategy: &str) -> Result<LedgerEntry, EngineError> {
        self.run_transform(word, strategy, self.checker)
    }

    /// Like [`Engine::transform`], but with a per-call tolerance
    /// overriding the engine default.
    pub fn transform_with_tolerance(
        &self,
        word: &str,
        strategy: &str,
        tolerance: f64,
    ) -> Result<LedgerEntry, EngineError> {
        let checker = ConservationChecker::new(tolerance)?;
        self.run_transform(word, strategy, checker)
    }

    fn run_transform(
        &self,
        word: &str,
        strategy: &str,
        checker: ConservationChecker,
    ) -> Result<LedgerEntry, EngineError> {
        let strategy = Strategy::from_name(strategy)?;
        let word = Word::parse(word)?;
        let check = checker.check(&word, strategy);
        let entry = self.ledger.append(&check)?;
        info!(
            word = %entry.input,
            strategy = %entry.strategy,
            verdict = %entry.verdict,
            drift = entry.drift,
            fingerprint = %entry.short_fingerprint(),
            "recorded conservation check"
        );
        Ok(entry)
    }

    /// Apply strategies in order, checking and recording each step
    /// against the previous step's output.
    ///
    /// Every name is resolved up front, so an unknown strategy anywhere
    /// in the sequence means no entry is appended at all.
    pub fn transform_sequence(
        &self,
        word: &str,
        strategies: &[&str],
    ) -> Result<Vec<LedgerEntry>, EngineError> {
        let resolved = strategies
            .iter()
            .map(|name| Strategy::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        let mut current = Word::parse(word)?;
        let mut entries = Vec::with_capacity(resolved.len());
        for strategy in resolved {
            let check = self.checker.check(&current, strategy);
            current = check.transformed.clone();
            entries.push(self.ledger.append(&check)?);
        }
        Ok(entries)
    }

    /// Audit the full ledger chain.
    pub fn audit_ledger(&self) -> Result<(), LedgerError> {
        self.ledger.verify()
    }

    /// Direct access to the underlying ledger.
    pub fn ledger(&self) -> &TransformLedger {
        &self.ledger
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use symphi_types::Verdict;

    use super::*;

    #[test]
    fn strategies_list_in_fixed_order() {
        assert_eq!(
            Engine::list_strategies(),
            vec!["mirror", "pairwise_rotate", "interleave", "symmetry_stabilize"]
        );
    }

    #[test]
    fn profile_reports_classes_energies_and_vectors() {
        let engine = Engine::new();
        let profile = engine.profile("HI").unwrap();
        assert_eq!(
            profile.classes,
            vec![SymmetryClass::Idempotent, SymmetryClass::Idempotent]
        );
        assert_eq!(profile.energies, vec![8.0, 9.0]);
        assert_eq!(profile.total_energy, 17.0);
        assert_eq!(profile.vectors.len(), 2);
        assert_eq!(profile.class_counts[&SymmetryClass::Idempotent], 2);
    }

    #[test]
    fn profile_rejects_bad_input() {
        let engine = Engine::new();
        assert!(matches!(engine.profile(""), Err(SymphiError::EmptyWord)));
        assert!(matches!(
            engine.profile("A1"),
            Err(SymphiError::InvalidLetter('1'))
        ));
    }

    #[test]
    fn mirror_transform_is_conserved() {
        let engine = Engine::with_config(EngineConfig { tolerance: 0.0001 }).unwrap();
        let entry = engine.transform("AB", "mirror").unwrap();
        assert_eq!(entry.transformed.to_string(), "BA");
        assert_eq!(entry.drift, 0.0);
        assert_eq!(entry.verdict, Verdict::Conserved);
    }

    #[test]
    fn pairwise_rotate_swaps_the_single_pair() {
        let engine = Engine::with_config(EngineConfig { tolerance: 0.0001 }).unwrap();
        let entry = engine.transform("AB", "pairwise_rotate").unwrap();
        assert_eq!(entry.transformed.to_string(), "BA");
        assert_eq!(entry.verdict, Verdict::Conserved);
    }

    #[test]
    fn stabilize_on_mixed_classes_violates_tight_tolerance() {
        let engine = Engine::with_config(EngineConfig { tolerance: 0.0001 }).unwrap();
        let entry = engine.transform("SQ", "symmetry_stabilize").unwrap();
        assert_eq!(entry.transformed.to_string(), "SF");
        assert!(entry.drift > engine.tolerance());
        assert_eq!(entry.verdict, Verdict::Violated);
        engine.audit_ledger().unwrap();
    }

    #[test]
    fn empty_word_fails_before_any_append() {
        let engine = Engine::new();
        let err = engine.transform("", "mirror").unwrap_err();
        assert!(matches!(err, EngineError::Domain(SymphiError::EmptyWord)));
        assert!(engine.ledger().is_empty().unwrap());
    }

    #[test]
    fn unknown_strategy_fails_before_word_parsing() {
        let engine = Engine::new();
        // The empty word would also be invalid; the strategy error wins.
        let err = engine.transform("", "warp").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(SymphiError::UnknownStrategy(_))
        ));
        assert!(engine.ledger().is_empty().unwrap());
    }

    #[test]
    fn negative_tolerance_is_rejected_at_construction() {
        assert!(matches!(
            Engine::with_config(EngineConfig { tolerance: -0.5 }),
            Err(SymphiError::NegativeTolerance(_))
        ));
    }

    #[test]
    fn per_call_tolerance_overrides_the_default() {
        let engine = Engine::new();
        let entry = engine
            .transform_with_tolerance("SQ", "symmetry_stabilize", 100.0)
            .unwrap();
        assert_eq!(entry.verdict, Verdict::Conserved);

        let err = engine
            .transform_with_tolerance("SQ", "symmetry_stabilize", -1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(SymphiError::NegativeTolerance(_))
        ));
        engine.audit_ledger().unwrap();
    }

    #[test]
    fn audit_passes_after_many_transforms() {
        let engine = Engine::new();
        for strategy in Engine::list_strategies() {
            engine.transform("SYMPHI", strategy).unwrap();
        }
        assert_eq!(engine.ledger().len().unwrap(), 4);
        engine.audit_ledger().unwrap();
    }

    #[test]
    fn transform_sequence_chains_step_outputs() {
        let engine = Engine::new();
        let entries = engine
            .transform_sequence("SYMPHI", &["mirror", "interleave"])
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].input, entries[0].transformed);
        engine.audit_ledger().unwrap();
    }

    #[test]
    fn transform_sequence_rejects_unknown_names_up_front() {
        let engine = Engine::new();
        let err = engine
            .transform_sequence("SYMPHI", &["mirror", "warp"])
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Domain(SymphiError::UnknownStrategy(_))
        ));
        assert!(engine.ledger().is_empty().unwrap());
    }

    #[test]
    fn identical_runs_reproduce_identical_fingerprints() {
        let fingerprints: Vec<Vec<String>> = (0..2)
            .map(|_| {
                let engine = Engine::new();
                engine.transform("AB", "mirror").unwrap();
                engine.transform("SQ", "symmetry_stabilize").unwrap();
                engine
                    .ledger()
                    .entries()
                    .unwrap()
                    .into_iter()
                    .map(|entry| entry.fingerprint_hex())
                    .collect()
            })
            .collect();
        assert_eq!(fingerprints[0], fingerprints[1]);
    }
}
