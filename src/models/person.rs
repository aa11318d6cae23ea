//! People and their income sources
//!
//! A person is a member of the household with an ordered list of income
//! sources, each recorded at its own recurrence frequency. The person's
//! total income is the frequency-normalized yearly sum of the sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::ids::{IncomeSourceId, PersonId};
use super::money::Money;

/// Validation errors for people and their income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    NegativeIncomeAmount { source_name: String },
}

impl std::fmt::Display for PersonValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Person name cannot be empty"),
            Self::NegativeIncomeAmount { source_name } => {
                write!(f, "Income source '{}' cannot have a negative amount", source_name)
            }
        }
    }
}

impl std::error::Error for PersonValidationError {}

/// One recurring source of income (salary, freelance gig, benefits, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
}

impl IncomeSource {
    /// Create a new income source
    pub fn new(name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            id: IncomeSourceId::new(),
            name: name.into(),
            amount,
            frequency,
        }
    }

    /// The source's amount converted to a yearly figure
    pub fn yearly_amount(&self) -> Money {
        self.amount * self.frequency.per_year()
    }
}

/// A member of the household
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a new person with no income sources yet
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PersonId::new(),
            name: name.into(),
            income_sources: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an income source
    pub fn add_income_source(&mut self, source: IncomeSource) {
        self.income_sources.push(source);
        self.updated_at = Utc::now();
    }

    /// Remove an income source by id; returns it if present
    pub fn remove_income_source(&mut self, id: IncomeSourceId) -> Option<IncomeSource> {
        let index = self.income_sources.iter().position(|s| s.id == id)?;
        self.updated_at = Utc::now();
        Some(self.income_sources.remove(index))
    }

    /// Rename the person
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Total income, normalized to a yearly figure
    pub fn yearly_income(&self) -> Money {
        self.income_sources.iter().map(|s| s.yearly_amount()).sum()
    }

    /// Validate the person and every income source
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        for source in &self.income_sources {
            if source.amount.is_negative() {
                return Err(PersonValidationError::NegativeIncomeAmount {
                    source_name: source.name.clone(),
                });
            }
        }
        Ok(())
    }
}
