//! Household overview report
//!
//! One row per person: income, personal spending, allocated household
//! share, and what remains, all in the chosen display unit. The
//! allocator's invariant survives the unit transform: row shares still
//! sum to the household expense total.

use serde::Serialize;

use crate::engine::{aggregate, PersonBreakdown};
use crate::models::{
    DistributionMethod, Expense, HouseholdSettings, Money, Person, PersonId, TimeUnit,
};

/// One person's figures within the overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRow {
    pub person_id: PersonId,
    pub name: String,
    pub income: Money,
    pub personal_expenses: Money,
    pub household_share: Money,
    pub remaining: Money,
    /// True when remaining is negative
    pub over_budget: bool,
}

/// Per-person breakdowns for the whole household
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdOverview {
    pub unit: TimeUnit,
    pub distribution_method: DistributionMethod,
    pub rows: Vec<PersonRow>,
    /// The shared expense total the rows' shares add up to
    pub total_household_expenses: Money,
}

impl HouseholdOverview {
    /// Generate the overview for a household
    pub fn generate(
        people: &[Person],
        expenses: &[Expense],
        settings: &HouseholdSettings,
        unit: TimeUnit,
    ) -> Self {
        let scale = match unit {
            TimeUnit::Yearly => 1.0,
            TimeUnit::Monthly => 1.0 / 12.0,
        };

        let rows = people
            .iter()
            .map(|person| {
                let b = PersonBreakdown::compute(person, people, expenses, settings);
                PersonRow {
                    person_id: person.id,
                    name: person.name.clone(),
                    income: b.income * scale,
                    personal_expenses: b.personal_expenses * scale,
                    household_share: b.household_share * scale,
                    remaining: b.remaining * scale,
                    over_budget: b.is_over_budget(),
                }
            })
            .collect();

        Self {
            unit,
            distribution_method: settings.distribution_method,
            rows,
            total_household_expenses: aggregate::household_expenses(expenses) * scale,
        }
    }

    /// Check if anyone in the household is over budget
    pub fn has_over_budget(&self) -> bool {
        self.rows.iter().any(|r| r.over_budget)
    }
}
