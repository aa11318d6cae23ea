//! Core data models for the budget engine
//!
//! This module contains the data structures that represent the budgeting
//! domain: people and their income sources, expenses, recurrence
//! frequencies, and household settings. The engine only reads these;
//! creating, editing, and deleting them is the surrounding application's
//! job.

pub mod expense;
pub mod frequency;
pub mod ids;
pub mod money;
pub mod person;
pub mod settings;

pub use expense::{Expense, ExpenseCategory};
pub use frequency::{Frequency, TimeUnit};
pub use ids::{ExpenseId, IncomeSourceId, PersonId};
pub use money::Money;
pub use person::{IncomeSource, Person};
pub use settings::{DistributionMethod, HouseholdSettings};

use crate::error::{BudgetError, BudgetResult};

/// Validate every person and expense in one pass
///
/// The engine itself stays total on inconsistent data (documented
/// fallbacks), so this is for the surrounding application: call it at
/// data entry to reject bad input before it is stored.
pub fn validate_entities(people: &[Person], expenses: &[Expense]) -> BudgetResult<()> {
    for person in people {
        person
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
    }
    for expense in expenses {
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
    }
    Ok(())
}
