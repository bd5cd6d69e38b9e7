//! Property-based tests for assessment invariants.
//!
//! These tests verify properties that should hold for any allocation:
//! - Assessment is deterministic
//! - Entries within tolerance are never reported
//! - Reported status follows the sign of the deviation
//! - Output order follows input order

use proptest::prelude::*;
use riskcalc_core::{assess, AllocationEntry, DeviationStatus, RiskError, RiskProfile};

// =============================================================================
// STRATEGIES
// =============================================================================

fn profile() -> impl Strategy<Value = RiskProfile> {
    prop::sample::select(RiskProfile::ALL.to_vec())
}

fn asset_class() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("EQ".to_string()),
        Just("IG Bonds".to_string()),
        Just("HY".to_string()),
        Just("Cash".to_string()),
        Just("Alts".to_string()),
        "[A-Za-z ]{1,12}",
    ]
}

fn entry() -> impl Strategy<Value = AllocationEntry> {
    (asset_class(), 0.0f64..100.0).prop_map(|(a, w)| AllocationEntry::new(a, w))
}

fn allocation() -> impl Strategy<Value = Vec<AllocationEntry>> {
    prop::collection::vec(entry(), 0..12)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn assessment_is_deterministic(p in profile(), alloc in allocation()) {
        let first = assess(p.as_str(), &alloc).unwrap();
        let second = assess(p.as_str(), &alloc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn within_tolerance_never_reported(p in profile(), alloc in allocation()) {
        let model = p.model();
        let result = assess(p.as_str(), &alloc).unwrap();

        let expected: Vec<&str> = alloc
            .iter()
            .filter(|e| (e.weight_pct - model.target_for(&e.asset_class)).abs() >= 5.0)
            .map(|e| e.asset_class.as_str())
            .collect();
        let reported: Vec<&str> = result.deviations.iter().map(|d| d.asset.as_str()).collect();

        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn status_follows_sign(p in profile(), e in entry()) {
        let delta = e.weight_pct - p.model().target_for(&e.asset_class);
        let result = assess(p.as_str(), std::slice::from_ref(&e)).unwrap();

        if delta >= 5.0 {
            prop_assert_eq!(result.deviations.len(), 1);
            prop_assert_eq!(result.deviations[0].status, DeviationStatus::Overweight);
            prop_assert!(result.deviations[0].delta >= 5.0);
        } else if delta <= -5.0 {
            prop_assert_eq!(result.deviations.len(), 1);
            prop_assert_eq!(result.deviations[0].status, DeviationStatus::Underweight);
            prop_assert!(result.deviations[0].delta <= -5.0);
        } else {
            prop_assert!(result.deviations.is_empty());
        }
    }

    #[test]
    fn reported_delta_is_close_to_exact(p in profile(), e in entry()) {
        let delta = e.weight_pct - p.model().target_for(&e.asset_class);
        let result = assess(p.as_str(), std::slice::from_ref(&e)).unwrap();

        for d in &result.deviations {
            prop_assert!((d.delta - delta).abs() <= 0.005 + 1e-9);
        }
    }

    #[test]
    fn unknown_profile_always_rejected(name in "[a-z]{1,16}", alloc in allocation()) {
        // Configured names start with an uppercase letter
        let err = assess(&name, &alloc).unwrap_err();
        prop_assert_eq!(err, RiskError::unknown_profile(name));
    }
}

#[test]
fn not_a_real_profile_is_rejected() {
    let err = assess("NotARealProfile", &[]).unwrap_err();
    assert!(matches!(err, RiskError::UnknownProfile { ref profile } if profile == "NotARealProfile"));
}
