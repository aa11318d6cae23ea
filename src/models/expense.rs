//! Expense model
//!
//! An expense is either a household cost (shared across everyone by the
//! configured distribution method) or a personal cost owned by exactly
//! one person. The optional validity window marks expenses that only run
//! for part of the year, e.g. a gym contract ending in June; the engine
//! itself ignores the window, callers filter with [`Expense::is_active_on`]
//! before aggregating.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::{ExpenseId, PersonId};
use super::money::Money;

/// Whether an expense is shared or attributed to one person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Household,
    Personal,
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
    PersonalWithoutOwner,
    InvalidValidityWindow,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::PersonalWithoutOwner => {
                write!(f, "A personal expense must name an owning person")
            }
            Self::InvalidValidityWindow => {
                write!(f, "Expense end date cannot be before its start date")
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub category: ExpenseCategory,
    /// Owner of a personal expense; ignored for household expenses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<PersonId>,
    /// First day the expense applies, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    /// Last day the expense applies, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a household (shared) expense
    pub fn household(description: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            frequency,
            category: ExpenseCategory::Household,
            person_id: None,
            starts_on: None,
            ends_on: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a personal expense owned by one person
    pub fn personal(
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        person_id: PersonId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            frequency,
            category: ExpenseCategory::Personal,
            person_id: Some(person_id),
            starts_on: None,
            ends_on: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set or clear the validity window
    pub fn set_validity(&mut self, starts_on: Option<NaiveDate>, ends_on: Option<NaiveDate>) {
        self.starts_on = starts_on;
        self.ends_on = ends_on;
        self.updated_at = Utc::now();
    }

    /// Update the recorded amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// The expense's amount converted to a yearly figure
    pub fn yearly_amount(&self) -> Money {
        self.amount * self.frequency.per_year()
    }

    /// Check whether the expense applies on the given date
    ///
    /// Missing bounds are open-ended: no start date means "since forever",
    /// no end date means "indefinitely".
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.starts_on {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.ends_on {
            if date > end {
                return false;
            }
        }
        true
    }

    /// Check whether the expense ends within `days` days of `date`
    ///
    /// The hook the expiring-expenses view is built on. Open-ended
    /// expenses never expire.
    pub fn expires_within(&self, date: NaiveDate, days: i64) -> bool {
        match self.ends_on {
            Some(end) => end >= date && end <= date + Duration::days(days),
            None => false,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.category == ExpenseCategory::Personal && self.person_id.is_none() {
            return Err(ExpenseValidationError::PersonalWithoutOwner);
        }
        if let (Some(start), Some(end)) = (self.starts_on, self.ends_on) {
            if end < start {
                return Err(ExpenseValidationError::InvalidValidityWindow);
            }
        }
        Ok(())
    }
}
