//! Deviation assessment against a target allocation model.
//!
//! Compares each caller-supplied allocation entry with the target weight of
//! its asset class and reports entries whose absolute deviation reaches
//! [`DEVIATION_THRESHOLD_PCT`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RiskResult;
use crate::models::{target_model, TargetModel, DEVIATION_THRESHOLD_PCT};

/// A single holding in the caller's current allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Asset class label (e.g. "EQ", "IG Bonds").
    pub asset_class: String,

    /// Current weight in percent.
    pub weight_pct: f64,
}

impl AllocationEntry {
    /// Creates a new allocation entry.
    #[must_use]
    pub fn new(asset_class: impl Into<String>, weight_pct: f64) -> Self {
        Self {
            asset_class: asset_class.into(),
            weight_pct,
        }
    }
}

/// Direction of a deviation relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviationStatus {
    /// Held above target.
    Overweight,

    /// Held below target.
    Underweight,
}

impl DeviationStatus {
    /// Classifies a signed delta. Anything not strictly positive is underweight.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Overweight
        } else {
            Self::Underweight
        }
    }

    /// Returns the status label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overweight => "Overweight",
            Self::Underweight => "Underweight",
        }
    }
}

impl std::fmt::Display for DeviationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asset class whose weight breaches the deviation threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    /// Asset class label, as supplied.
    pub asset: String,

    /// Current minus target weight, rounded to 2 decimal places.
    pub delta: f64,

    /// Overweight or underweight.
    pub status: DeviationStatus,
}

/// Result of assessing an allocation against a risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// The profile name the allocation was assessed against.
    pub risk_profile: String,

    /// Deviations in input order.
    pub deviations: Vec<Deviation>,
}

impl Assessment {
    /// Returns true if no asset class breached the threshold.
    #[must_use]
    pub fn is_within_tolerance(&self) -> bool {
        self.deviations.is_empty()
    }
}

/// Assesses an allocation against the named risk profile.
///
/// Each entry is compared independently, so duplicated asset classes yield
/// one deviation each. Asset classes absent from the model have a target
/// of 0.
///
/// # Errors
///
/// Returns [`RiskError::UnknownProfile`](crate::RiskError::UnknownProfile)
/// if `profile` is not a configured profile name.
///
/// # Example
///
/// ```
/// use riskcalc_core::{assess, AllocationEntry, DeviationStatus};
///
/// let result = assess("Growth", &[AllocationEntry::new("Alts", 0.0)]).unwrap();
/// assert_eq!(result.deviations[0].delta, -5.0);
/// assert_eq!(result.deviations[0].status, DeviationStatus::Underweight);
/// ```
pub fn assess(profile: &str, allocations: &[AllocationEntry]) -> RiskResult<Assessment> {
    let model = target_model(profile)?;

    Ok(Assessment {
        risk_profile: profile.to_string(),
        deviations: deviations(model, allocations),
    })
}

/// Deviations of `allocations` from `model`, in input order.
#[must_use]
pub fn deviations(model: &TargetModel, allocations: &[AllocationEntry]) -> Vec<Deviation> {
    allocations
        .iter()
        .filter_map(|entry| {
            let delta = entry.weight_pct - model.target_for(&entry.asset_class);
            (delta.abs() >= DEVIATION_THRESHOLD_PCT).then(|| Deviation {
                asset: entry.asset_class.clone(),
                delta: round_delta(delta),
                status: DeviationStatus::from_delta(delta),
            })
        })
        .collect()
}

/// Rounds to 2 decimal places, half-to-even on the exact binary value.
fn round_delta(delta: f64) -> f64 {
    Decimal::from_f64_retain(delta)
        .and_then(|d| d.round_dp(2).to_f64())
        .unwrap_or(delta)
}
