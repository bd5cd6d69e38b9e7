//! # RiskCalc Core
//!
//! Target allocation models and deviation assessment for portfolio risk
//! profiles.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: assessment is stateless with explicit inputs
//! - **Static models**: target allocations are fixed business data, not configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use riskcalc_core::{assess, AllocationEntry, DeviationStatus};
//!
//! let allocation = vec![
//!     AllocationEntry::new("EQ", 60.0),
//!     AllocationEntry::new("IG Bonds", 40.0),
//!     AllocationEntry::new("Cash", 5.0),
//! ];
//!
//! let result = assess("Balanced", &allocation).unwrap();
//! assert_eq!(result.deviations.len(), 1);
//! assert_eq!(result.deviations[0].asset, "EQ");
//! assert_eq!(result.deviations[0].status, DeviationStatus::Overweight);
//! ```
//!
//! ## Module Overview
//!
//! - [`assessment`] - Deviation assessment
//! - [`models`] - Risk profiles and their target allocation models
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assessment;
pub mod error;
pub mod models;

pub use assessment::{assess, deviations, AllocationEntry, Assessment, Deviation, DeviationStatus};
pub use error::{RiskError, RiskResult};
pub use models::{target_model, RiskProfile, TargetModel, DEVIATION_THRESHOLD_PCT};
