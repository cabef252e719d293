//! The conservation checker.

use serde::{Deserialize, Serialize};
use symphi_types::{SymphiError, Verdict, Word};

use crate::energy::total_energy;
use crate::strategy::Strategy;

/// Default conservation tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Everything a single conservation check produced. Immutable once built;
/// the ledger fingerprints these fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConservationCheck {
    pub input: Word,
    pub strategy: Strategy,
    pub transformed: Word,
    pub pre_energy: f64,
    pub post_energy: f64,
    pub drift: f64,
    pub verdict: Verdict,
}

/// Compares pre- and post-transformation total energy against a fixed
/// tolerance. Pure given that tolerance; neither word is ever mutated.
#[derive(Clone, Copy, Debug)]
pub struct ConservationChecker {
    tolerance: f64,
}

impl ConservationChecker {
    /// Build a checker. The tolerance bounds acceptable absolute drift and
    /// must be non-negative.
    pub fn new(tolerance: f64) -> Result<Self, SymphiError> {
        if tolerance < 0.0 || tolerance.is_nan() {
            return Err(SymphiError::NegativeTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Run one check: transform, measure both sides, compare.
    pub fn check(&self, word: &Word, strategy: Strategy) -> ConservationCheck {
        let pre_energy = total_energy(word);
        let transformed = strategy.apply(word);
        let post_energy = total_energy(&transformed);
        let drift = (post_energy - pre_energy).abs();
        let verdict = if drift <= self.tolerance {
            Verdict::Conserved
        } else {
            Verdict::Violated
        };
        ConservationCheck {
            input: word.clone(),
            strategy,
            transformed,
            pre_energy,
            post_energy,
            drift,
            verdict,
        }
    }
}

impl Default for ConservationChecker {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_check_reports_zero_drift() {
        let checker = ConservationChecker::default();
        let word = Word::parse("AB").unwrap();
        let check = checker.check(&word, Strategy::Mirror);
        assert_eq!(check.transformed.to_string(), "BA");
        assert_eq!(check.drift, 0.0);
        assert_eq!(check.verdict, Verdict::Conserved);
    }

    #[test]
    fn stabilize_can_violate_conservation() {
        let checker = ConservationChecker::new(0.0001).unwrap();
        let word = Word::parse("SQ").unwrap();
        let check = checker.check(&word, Strategy::SymmetryStabilize);
        // S keeps its own class representative; Q collapses to F.
        assert_eq!(check.transformed.to_string(), "SF");
        assert!(check.drift > checker.tolerance());
        assert_eq!(check.verdict, Verdict::Violated);
    }

    #[test]
    fn drift_within_tolerance_is_conserved() {
        let checker = ConservationChecker::new(100.0).unwrap();
        let word = Word::parse("SQ").unwrap();
        let check = checker.check(&word, Strategy::SymmetryStabilize);
        assert_eq!(check.drift, 16.5);
        assert_eq!(check.verdict, Verdict::Conserved);
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        assert!(matches!(
            ConservationChecker::new(-1.0),
            Err(SymphiError::NegativeTolerance(_))
        ));
    }

    #[test]
    fn check_does_not_mutate_the_input() {
        let checker = ConservationChecker::default();
        let word = Word::parse("SYMPHI").unwrap();
        let before = word.clone();
        let _ = checker.check(&word, Strategy::Interleave);
        assert_eq!(word, before);
    }
}
