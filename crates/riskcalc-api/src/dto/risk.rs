//! Risk assessment DTOs.

use riskcalc_core::{AllocationEntry, Assessment, Deviation, DeviationStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single holding in the current allocation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AllocationInput {
    /// Asset class label (e.g. "EQ", "IG Bonds").
    #[schema(example = "EQ")]
    pub asset_class: String,

    /// Current weight in percent. Numeric strings such as "60" are accepted.
    #[schema(example = 60.0)]
    #[serde(deserialize_with = "deserialize_weight")]
    pub weight_pct: f64,
}

/// Accepts a JSON number or a string holding one.
fn deserialize_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("weight_pct is not a valid number: {s:?}"))
        }),
    }
}

impl From<AllocationInput> for AllocationEntry {
    fn from(input: AllocationInput) -> Self {
        AllocationEntry::new(input.asset_class, input.weight_pct)
    }
}

/// Risk assessment request.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AssessRequest {
    /// Risk profile name: Conservative, Balanced or Growth.
    #[schema(example = "Balanced")]
    pub risk_profile: String,

    /// Current portfolio allocation.
    pub current_allocation: Vec<AllocationInput>,
}

impl AssessRequest {
    /// Converts the allocation into core entries, preserving order.
    pub fn allocation_entries(self) -> Vec<AllocationEntry> {
        self.current_allocation.into_iter().map(Into::into).collect()
    }
}

/// Deviation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DeviationStatusCode {
    Overweight,
    Underweight,
}

impl From<DeviationStatus> for DeviationStatusCode {
    fn from(status: DeviationStatus) -> Self {
        match status {
            DeviationStatus::Overweight => DeviationStatusCode::Overweight,
            DeviationStatus::Underweight => DeviationStatusCode::Underweight,
        }
    }
}

/// An asset class outside tolerance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviationOutput {
    /// Asset class label.
    pub asset: String,

    /// Current minus target weight, rounded to 2 decimal places.
    pub delta: f64,

    /// Overweight or Underweight.
    pub status: DeviationStatusCode,
}

impl From<Deviation> for DeviationOutput {
    fn from(d: Deviation) -> Self {
        Self {
            asset: d.asset,
            delta: d.delta,
            status: d.status.into(),
        }
    }
}

/// Risk assessment response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessResponse {
    pub risk_profile: String,
    pub deviations: Vec<DeviationOutput>,
}

impl From<Assessment> for AssessResponse {
    fn from(a: Assessment) -> Self {
        Self {
            risk_profile: a.risk_profile,
            deviations: a.deviations.into_iter().map(Into::into).collect(),
        }
    }
}
