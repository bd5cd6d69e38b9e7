//! Error types for risk assessment.
//!
//! This module defines the error types used throughout the core crate.

use thiserror::Error;

/// Result type for risk assessment operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk assessment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// The requested risk profile has no target allocation model.
    #[error("Unknown profile: {profile}")]
    UnknownProfile {
        /// The profile name as supplied by the caller.
        profile: String,
    },
}

impl RiskError {
    /// Create an unknown profile error.
    #[must_use]
    pub fn unknown_profile(profile: impl Into<String>) -> Self {
        Self::UnknownProfile {
            profile: profile.into(),
        }
    }
}
