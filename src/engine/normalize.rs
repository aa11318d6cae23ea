//! Frequency normalization
//!
//! Converts an amount recorded at an arbitrary recurrence frequency into
//! a monthly or yearly figure. Pure arithmetic, no rounding; formatting
//! is a display concern outside the engine.

use crate::models::{Frequency, Money, TimeUnit};

/// Convert an amount from its recorded frequency to the requested unit
///
/// The amount is first scaled to a yearly total by the frequency's
/// occurrences-per-year multiplier, then divided by 12 for the monthly
/// view.
pub fn normalize(amount: Money, frequency: Frequency, unit: TimeUnit) -> Money {
    let yearly = amount * frequency.per_year();
    match unit {
        TimeUnit::Yearly => yearly,
        TimeUnit::Monthly => yearly / 12.0,
    }
}
