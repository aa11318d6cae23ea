//! Per-person budget breakdown
//!
//! Composes aggregation and allocation into one person's view of the
//! budget: what they earn, what they spend on themselves, what slice of
//! the shared costs lands on them, and what is left. Recomputed from
//! scratch on every input change; there is no state to keep in sync.

use serde::Serialize;

use crate::engine::{aggregate, allocate};
use crate::models::{Expense, HouseholdSettings, Money, Person, PersonId};

/// One person's yearly budget figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonBreakdown {
    pub person_id: PersonId,
    /// Normalized yearly income across the person's income sources
    pub income: Money,
    /// Yearly total of the person's own (personal) expenses
    pub personal_expenses: Money,
    /// The person's allocated slice of the household expenses
    pub household_share: Money,
    /// income - personal_expenses - household_share; negative means over
    /// budget, which is a normal outcome the UI surfaces, not an error
    pub remaining: Money,
}

impl PersonBreakdown {
    /// Compute the breakdown for one person
    ///
    /// `people` must be the full household (the allocator needs everyone
    /// to size the person's share); `expenses` is the full expense
    /// collection, household and personal alike.
    pub fn compute(
        person: &Person,
        people: &[Person],
        expenses: &[Expense],
        settings: &HouseholdSettings,
    ) -> Self {
        let income = aggregate::person_income(person);
        let personal_expenses = aggregate::personal_expenses(expenses, Some(person.id));
        let household_share = allocate::household_share(
            aggregate::household_expenses(expenses),
            people,
            settings.distribution_method,
            person.id,
        );

        Self {
            person_id: person.id,
            income,
            personal_expenses,
            household_share,
            remaining: income - personal_expenses - household_share,
        }
    }

    /// Check if the person is spending more than they earn
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistributionMethod, Frequency, IncomeSource};

    fn person_earning(name: &str, yearly: f64) -> Person {
        let mut person = Person::new(name);
        person.add_income_source(IncomeSource::new(
            "Salary",
            Money::new(yearly),
            Frequency::Yearly,
        ));
        person
    }

    #[test]
    fn test_single_person_scenario() {
        // One person, 60000 yearly income, 6000 household, 12000 personal
        let person = person_earning("Alex", 60000.0);
        let people = vec![person.clone()];
        let expenses = vec![
            Expense::household("Rent", Money::new(6000.0), Frequency::Yearly),
            Expense::personal("Car", Money::new(12000.0), Frequency::Yearly, person.id),
        ];
        let settings = HouseholdSettings::default();

        let breakdown = PersonBreakdown::compute(&person, &people, &expenses, &settings);

        assert_eq!(breakdown.income.value(), 60000.0);
        assert_eq!(breakdown.personal_expenses.value(), 12000.0);
        assert_eq!(breakdown.household_share.value(), 6000.0);
        assert_eq!(breakdown.remaining.value(), 42000.0);
        assert!(!breakdown.is_over_budget());
    }

    #[test]
    fn test_remaining_identity_holds() {
        let alex = person_earning("Alex", 30000.0);
        let sam = person_earning("Sam", 10000.0);
        let people = vec![alex.clone(), sam.clone()];
        let expenses = vec![
            Expense::household("Rent", Money::new(4000.0), Frequency::Yearly),
            Expense::personal("Gym", Money::new(40.0), Frequency::Monthly, sam.id),
        ];
        let settings = HouseholdSettings {
            distribution_method: DistributionMethod::IncomeBased,
        };

        for person in &people {
            let b = PersonBreakdown::compute(person, &people, &expenses, &settings);
            assert_eq!(
                b.remaining,
                b.income - b.personal_expenses - b.household_share
            );
        }
    }

    #[test]
    fn test_income_based_share_lands_on_each_person() {
        let alex = person_earning("Alex", 30000.0);
        let sam = person_earning("Sam", 10000.0);
        let people = vec![alex.clone(), sam.clone()];
        let expenses = vec![Expense::household(
            "Rent",
            Money::new(4000.0),
            Frequency::Yearly,
        )];
        let settings = HouseholdSettings {
            distribution_method: DistributionMethod::IncomeBased,
        };

        let b_alex = PersonBreakdown::compute(&alex, &people, &expenses, &settings);
        let b_sam = PersonBreakdown::compute(&sam, &people, &expenses, &settings);

        assert!(b_alex.household_share.approx_eq(Money::new(3000.0), 1e-6));
        assert!(b_sam.household_share.approx_eq(Money::new(1000.0), 1e-6));
    }

    #[test]
    fn test_over_budget_is_a_normal_outcome() {
        let person = person_earning("Alex", 10000.0);
        let people = vec![person.clone()];
        let expenses = vec![Expense::personal(
            "Rent alone",
            Money::new(1500.0),
            Frequency::Monthly,
            person.id,
        )];
        let settings = HouseholdSettings::default();

        let breakdown = PersonBreakdown::compute(&person, &people, &expenses, &settings);

        assert_eq!(breakdown.remaining.value(), -8000.0);
        assert!(breakdown.is_over_budget());
    }

    #[test]
    fn test_recomputation_is_stable() {
        let person = person_earning("Alex", 60000.0);
        let people = vec![person.clone()];
        let expenses = vec![Expense::household(
            "Rent",
            Money::new(500.0),
            Frequency::Monthly,
        )];
        let settings = HouseholdSettings::default();

        let first = PersonBreakdown::compute(&person, &people, &expenses, &settings);
        let second = PersonBreakdown::compute(&person, &people, &expenses, &settings);
        assert_eq!(first, second);
    }
}
