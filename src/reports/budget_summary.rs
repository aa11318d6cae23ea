//! Budget summary report
//!
//! The whole household's aggregates in one struct, projected into the
//! caller's chosen display unit.

use serde::Serialize;

use crate::engine::aggregate;
use crate::models::{Expense, Money, Person, TimeUnit};

/// Aggregated household figures in a chosen display unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    /// The unit every figure below is expressed in
    pub unit: TimeUnit,
    pub total_income: Money,
    pub total_expenses: Money,
    pub household_expenses: Money,
    pub personal_expenses: Money,
    /// total_income - total_expenses
    pub remaining: Money,
}

impl BudgetSummary {
    /// Generate the summary for a household
    pub fn generate(people: &[Person], expenses: &[Expense], unit: TimeUnit) -> Self {
        let scale = match unit {
            TimeUnit::Yearly => 1.0,
            TimeUnit::Monthly => 1.0 / 12.0,
        };

        let total_income = aggregate::total_income(people) * scale;
        let total_expenses = aggregate::total_expenses(expenses) * scale;

        Self {
            unit,
            total_income,
            total_expenses,
            household_expenses: aggregate::household_expenses(expenses) * scale,
            personal_expenses: aggregate::personal_expenses(expenses, None) * scale,
            remaining: total_income - total_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, IncomeSource};

    fn sample_household() -> (Vec<Person>, Vec<Expense>) {
        let mut alex = Person::new("Alex");
        alex.add_income_source(IncomeSource::new(
            "Salary",
            Money::new(60000.0),
            Frequency::Yearly,
        ));
        let alex_id = alex.id;

        let expenses = vec![
            Expense::household("Rent", Money::new(6000.0), Frequency::Yearly),
            Expense::personal("Car", Money::new(12000.0), Frequency::Yearly, alex_id),
        ];

        (vec![alex], expenses)
    }

    #[test]
    fn test_yearly_summary() {
        let (people, expenses) = sample_household();
        let summary = BudgetSummary::generate(&people, &expenses, TimeUnit::Yearly);

        assert_eq!(summary.total_income.value(), 60000.0);
        assert_eq!(summary.total_expenses.value(), 18000.0);
        assert_eq!(summary.household_expenses.value(), 6000.0);
        assert_eq!(summary.personal_expenses.value(), 12000.0);
        assert_eq!(summary.remaining.value(), 42000.0);
    }

    #[test]
    fn test_monthly_view_divides_every_figure_by_twelve() {
        let (people, expenses) = sample_household();
        let yearly = BudgetSummary::generate(&people, &expenses, TimeUnit::Yearly);
        let monthly = BudgetSummary::generate(&people, &expenses, TimeUnit::Monthly);

        assert_eq!(monthly.total_income.value(), yearly.total_income.value() / 12.0);
        assert_eq!(monthly.total_expenses.value(), yearly.total_expenses.value() / 12.0);
        assert_eq!(
            monthly.household_expenses.value(),
            yearly.household_expenses.value() / 12.0
        );
        assert_eq!(
            monthly.personal_expenses.value(),
            yearly.personal_expenses.value() / 12.0
        );
        assert_eq!(monthly.remaining.value(), yearly.remaining.value() / 12.0);
    }

    #[test]
    fn test_remaining_identity_holds_in_either_unit() {
        let (people, expenses) = sample_household();

        for unit in [TimeUnit::Monthly, TimeUnit::Yearly] {
            let summary = BudgetSummary::generate(&people, &expenses, unit);
            assert_eq!(
                summary.remaining,
                summary.total_income - summary.total_expenses
            );
        }
    }

    #[test]
    fn test_empty_household_summary_is_all_zero() {
        let summary = BudgetSummary::generate(&[], &[], TimeUnit::Monthly);
        assert!(summary.total_income.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.remaining.is_zero());
    }
}
