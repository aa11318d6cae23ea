//! Household settings
//!
//! The one piece of configuration the engine reads: which policy splits
//! household expenses across people. Every field carries a serde default
//! so a missing or partial settings document from the surrounding
//! application deserializes to sensible values.

use serde::{Deserialize, Serialize};

/// Policy for splitting household expenses across people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionMethod {
    /// Everyone pays the same share (default)
    #[default]
    Even,
    /// Shares proportional to each person's income
    IncomeBased,
}

/// Household-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HouseholdSettings {
    /// How household expenses are distributed
    #[serde(default)]
    pub distribution_method: DistributionMethod,
}
