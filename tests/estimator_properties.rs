//! Property-based tests for the complexity estimator
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every input maps to a label from the closed set
//! - Estimation is deterministic
//! - Earlier rules win over later ones regardless of surrounding text

use bigo_estimator::complexity::patterns::{FIBONACCI, MEMO_MARKER};
use bigo_estimator::{ComplexityEstimator, ComplexityLevel, Profile, RuleSet};
use proptest::prelude::*;

proptest! {
    /// Property: any string, including arbitrary unicode, yields one of the
    /// seven labels
    #[test]
    fn prop_estimate_is_total(code in any::<String>()) {
        for profile in [Profile::Canonical, Profile::Broad] {
            let level = ComplexityEstimator::new(RuleSet::for_profile(profile)).estimate(&code);
            prop_assert!(ComplexityLevel::ALL.contains(&level));
        }
    }

    /// Property: the same text always yields the same detailed estimate,
    /// whether from the same estimator or a freshly built one
    #[test]
    fn prop_estimate_is_deterministic(code in "[ -~\n]{0,200}") {
        let estimator = ComplexityEstimator::canonical();
        let first = estimator.estimate_detailed(&code);
        let second = estimator.estimate_detailed(&code);
        let fresh = ComplexityEstimator::canonical().estimate_detailed(&code);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }

    /// Property: unmemoized fibonacci beats any number of loop tokens
    #[test]
    fn prop_exponential_outranks_loops(
        filler in "[a-z ;=+]{0,40}",
        loops in 2usize..6,
    ) {
        prop_assume!(!MEMO_MARKER.is_match(&filler));
        let code = format!("{filler} fibonacci {}", "for(;;){} ".repeat(loops));
        prop_assert_eq!(
            ComplexityEstimator::canonical().estimate(&code),
            ComplexityLevel::Exponential
        );
    }

    /// Property: two or more loop tokens are quadratic unless the exponential
    /// rule fires first
    #[test]
    fn prop_loop_pairs_are_quadratic(filler in "[a-z0-9 ;=+]{0,40}", loops in 2usize..6) {
        prop_assume!(!FIBONACCI.is_match(&filler));
        let code = format!("{} {filler}", "while (x) {} ".repeat(loops));
        prop_assert_eq!(
            ComplexityEstimator::canonical().estimate(&code),
            ComplexityLevel::Quadratic
        );
    }

    /// Property: estimate and estimate_detailed agree on the label
    #[test]
    fn prop_detailed_agrees_with_plain(code in "[ -~]{0,120}") {
        let estimator = ComplexityEstimator::new(RuleSet::for_profile(Profile::Broad));
        prop_assert_eq!(estimator.estimate(&code), estimator.estimate_detailed(&code).level);
    }
}
