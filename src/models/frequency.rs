//! Recurrence frequencies and display units
//!
//! Income sources and expenses are recorded at whatever cadence the user
//! pays or receives them; the engine converts everything to a yearly
//! figure before summing. An unrecognized frequency in incoming data is a
//! configuration error and must fail loudly: silently assuming a
//! multiplier would hide data entry bugs behind plausible-looking totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// How often a recurring amount is paid or received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Number of occurrences per year
    pub fn per_year(&self) -> f64 {
        match self {
            Self::Weekly => 52.0,
            Self::BiWeekly => 26.0,
            Self::Monthly => 12.0,
            Self::Quarterly => 4.0,
            Self::Yearly => 1.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Frequency {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "bi-weekly" | "biweekly" => Ok(Self::BiWeekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            other => Err(BudgetError::invalid_frequency(other)),
        }
    }
}

/// The unit a caller wants figures reported in
///
/// Purely a view transform: the engine aggregates in yearly terms and the
/// reports layer divides by 12 for the monthly view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Monthly,
    Yearly,
}

impl FromStr for TimeUnit {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(BudgetError::invalid_frequency(other)),
        }
    }
}
