//! Income and expense aggregation
//!
//! All sums run over yearly-normalized values: normalizing first keeps
//! addition commutative across entries recorded at different frequencies,
//! so the iteration order of the input collections never matters.

use crate::models::{Expense, ExpenseCategory, Money, Person, PersonId};

/// A person's total income, normalized to a yearly figure
pub fn person_income(person: &Person) -> Money {
    person.yearly_income()
}

/// Summed yearly income across the whole household
pub fn total_income(people: &[Person]) -> Money {
    people.iter().map(Person::yearly_income).sum()
}

/// Summed yearly amount of every expense, household and personal alike
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(Expense::yearly_amount).sum()
}

/// Summed yearly amount of the shared (household) expenses
pub fn household_expenses(expenses: &[Expense]) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == ExpenseCategory::Household)
        .map(Expense::yearly_amount)
        .sum()
}

/// Summed yearly amount of personal expenses
///
/// With a `person_id`, only that person's expenses count; a personal
/// expense with a dangling or missing owner contributes nothing to a
/// scoped query. Without one, every personal expense counts.
pub fn personal_expenses(expenses: &[Expense], person_id: Option<PersonId>) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == ExpenseCategory::Personal)
        .filter(|e| match person_id {
            Some(id) => e.person_id == Some(id),
            None => true,
        })
        .map(Expense::yearly_amount)
        .sum()
}

/// Yearly income minus yearly expenses for the whole household
pub fn remaining(people: &[Person], expenses: &[Expense]) -> Money {
    total_income(people) - total_expenses(expenses)
}
