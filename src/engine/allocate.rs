//! Household expense allocation
//!
//! Splits the shared household total across people under the configured
//! distribution method. The function is total: conditions that could be
//! errors during a half-finished edit (an empty household, a person id
//! that no longer resolves, nobody earning anything) all resolve to
//! documented fallback values instead, because the surrounding UI
//! recomputes these figures mid-edit and must never crash.
//!
//! Invariant: the shares handed to all people in the set sum to the
//! household total (within floating-point tolerance) under both methods.

use crate::engine::aggregate;
use crate::models::{DistributionMethod, Money, Person, PersonId};

/// One person's share of the household expense total
///
/// Fallbacks, in order of checking:
/// - an empty `people` set yields a zero share for any id (no division
///   by zero);
/// - a `person_id` that matches nobody in `people` yields zero, since
///   breakdowns may be requested while references are transiently
///   inconsistent;
/// - under [`DistributionMethod::IncomeBased`], a household where the
///   summed income is zero falls back to the even split, so the total
///   still gets distributed instead of dividing by zero.
pub fn household_share(
    total_household_expense: Money,
    people: &[Person],
    method: DistributionMethod,
    person_id: PersonId,
) -> Money {
    if people.is_empty() {
        return Money::zero();
    }

    let person = match people.iter().find(|p| p.id == person_id) {
        Some(person) => person,
        None => return Money::zero(),
    };

    match method {
        DistributionMethod::Even => total_household_expense / people.len() as f64,
        DistributionMethod::IncomeBased => {
            let all_incomes = aggregate::total_income(people);
            if all_incomes.is_zero() {
                // Explicit fallback: with no income to weight by, split even
                return total_household_expense / people.len() as f64;
            }
            total_household_expense * (person.yearly_income().value() / all_incomes.value())
        }
    }
}
