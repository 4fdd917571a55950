//! Numeric reductions shared by [`Query`](crate::Query) and [`Group`](crate::Group).

use rust_decimal::{Decimal, RoundingStrategy};
use std::ops::{Add, Div};

/// A numeric type that can be summed and averaged.
///
/// Averages divide the sum by the element count converted through
/// [`Measure::from_count`], so integer measures truncate.
pub trait Measure: Copy + Add<Output = Self> + Div<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// Converts an element count into this measure.
    fn from_count(n: usize) -> Self;
}

impl Measure for Decimal {
    const ZERO: Self = Decimal::ZERO;

    fn from_count(n: usize) -> Self {
        Decimal::from(n)
    }
}

impl Measure for f64 {
    const ZERO: Self = 0.0;

    #[allow(clippy::cast_precision_loss)]
    fn from_count(n: usize) -> Self {
        n as f64
    }
}

impl Measure for i64 {
    const ZERO: Self = 0;

    fn from_count(n: usize) -> Self {
        i64::try_from(n).unwrap_or(i64::MAX)
    }
}

impl Measure for usize {
    const ZERO: Self = 0;

    fn from_count(n: usize) -> Self {
        n
    }
}

/// Sums a sequence of measures. The sum of an empty sequence is zero.
pub fn sum<M: Measure>(values: impl IntoIterator<Item = M>) -> M {
    values.into_iter().fold(M::ZERO, |acc, v| acc + v)
}

/// Arithmetic mean of a sequence, or `None` when it is empty.
pub fn average<M: Measure>(values: impl IntoIterator<Item = M>) -> Option<M> {
    let (total, n) = values
        .into_iter()
        .fold((M::ZERO, 0usize), |(acc, n), v| (acc + v, n + 1));
    (n > 0).then(|| total / M::from_count(n))
}

/// Rounds to `dp` decimal places, resolving midpoints away from zero.
///
/// `18.745` becomes `18.75` and `-18.745` becomes `-18.75`, unlike
/// banker's rounding which would yield `18.74`.
#[must_use]
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
