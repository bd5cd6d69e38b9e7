//! Target allocation models.
//!
//! Each [`RiskProfile`] maps to a fixed [`TargetModel`]: a list of asset
//! classes with their strategic target weight in percent. The table is
//! static business data and lives for the whole process.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// Minimum absolute deviation (percentage points) that is reported.
pub const DEVIATION_THRESHOLD_PCT: f64 = 5.0;

/// Named target-allocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    /// Capital preservation, bond heavy.
    Conservative,

    /// Even split between equities and bonds.
    Balanced,

    /// Equity heavy, with a small alternatives sleeve.
    Growth,
}

impl RiskProfile {
    /// All configured profiles, in table order.
    pub const ALL: [RiskProfile; 3] = [Self::Conservative, Self::Balanced, Self::Growth];

    /// Returns the profile name as used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Growth => "Growth",
        }
    }

    /// Returns the target allocation model for this profile.
    #[must_use]
    pub fn model(&self) -> &'static TargetModel {
        match self {
            Self::Conservative => &CONSERVATIVE,
            Self::Balanced => &BALANCED,
            Self::Growth => &GROWTH,
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = RiskError;

    /// Exact, case-sensitive match on the profile name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RiskError::unknown_profile(s))
    }
}

/// Strategic asset allocation for a single risk profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetModel {
    /// The profile this model belongs to.
    pub profile: RiskProfile,

    /// Asset class label and target weight (0-100%).
    targets: &'static [(&'static str, f64)],
}

impl TargetModel {
    /// Target weight for an asset class. Unlisted classes have a target of 0.
    #[must_use]
    pub fn target_for(&self, asset_class: &str) -> f64 {
        self.targets
            .iter()
            .find(|(label, _)| *label == asset_class)
            .map_or(0.0, |(_, weight)| *weight)
    }

    /// Asset classes and target weights, in table order.
    #[must_use]
    pub fn targets(&self) -> &'static [(&'static str, f64)] {
        self.targets
    }

    /// Sum of all target weights. Not required to be 100.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.targets.iter().map(|(_, w)| w).sum()
    }
}

static CONSERVATIVE: TargetModel = TargetModel {
    profile: RiskProfile::Conservative,
    targets: &[("EQ", 20.0), ("IG Bonds", 60.0), ("HY", 10.0), ("Cash", 10.0)],
};

static BALANCED: TargetModel = TargetModel {
    profile: RiskProfile::Balanced,
    targets: &[("EQ", 50.0), ("IG Bonds", 40.0), ("HY", 5.0), ("Cash", 5.0)],
};

static GROWTH: TargetModel = TargetModel {
    profile: RiskProfile::Growth,
    targets: &[("EQ", 70.0), ("IG Bonds", 20.0), ("HY", 5.0), ("Alts", 5.0)],
};

/// Looks up the target model for a profile name.
///
/// # Errors
///
/// Returns [`RiskError::UnknownProfile`] if `profile` is not one of the
/// configured names.
pub fn target_model(profile: &str) -> Result<&'static TargetModel, RiskError> {
    profile.parse::<RiskProfile>().map(|p| p.model())
}
