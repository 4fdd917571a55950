//! Sort keys and comparator chains for [`Query::order_by`](crate::Query::order_by).
//!
//! Comparators are built from key extractors and chained with
//! [`Comparator::then`] to express multi-key orderings:
//!
//! ```
//! use staffq_ops::{ascending, descending, Query};
//!
//! let rows = vec![('b', 1), ('a', 2), ('a', 1)];
//! let sorted = Query::new(rows)
//!     .order_by(ascending(|r: &(char, i32)| r.0).then(descending(|r: &(char, i32)| r.1)))
//!     .into_vec();
//!
//! assert_eq!(sorted, vec![('a', 2), ('a', 1), ('b', 1)]);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Sort direction for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest key first
    #[default]
    Ascending,

    /// Largest key first
    Descending,
}

impl Direction {
    /// Applies this direction to an ascending comparison result.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A total-order comparison over rows of type `T`.
///
/// Wraps a comparison closure so that several keys can be chained without
/// boxing.
pub struct Comparator<T, F> {
    cmp: F,
    _row: PhantomData<fn(&T, &T)>,
}

impl<T, F> Comparator<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Wraps an arbitrary comparison closure.
    pub fn from_fn(cmp: F) -> Self {
        Self {
            cmp,
            _row: PhantomData,
        }
    }

    /// Compares two rows.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Breaks ties of this comparator with `next`.
    pub fn then<G>(self, next: Comparator<T, G>) -> Comparator<T, impl Fn(&T, &T) -> Ordering>
    where
        G: Fn(&T, &T) -> Ordering,
    {
        Comparator::from_fn(move |a: &T, b: &T| {
            self.compare(a, b).then_with(|| next.compare(a, b))
        })
    }
}

/// Orders rows by the key returned from `key` in the given direction.
///
/// Keys need only be `PartialOrd`; incomparable keys (such as `NaN`) compare
/// as equal, which keeps the sort stable rather than panicking.
pub fn by_key<T, K, F>(key: F, direction: Direction) -> Comparator<T, impl Fn(&T, &T) -> Ordering>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    Comparator::from_fn(move |a: &T, b: &T| {
        let ordering = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        direction.apply(ordering)
    })
}

/// Shorthand for [`by_key`] with [`Direction::Ascending`].
pub fn ascending<T, K, F>(key: F) -> Comparator<T, impl Fn(&T, &T) -> Ordering>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    by_key(key, Direction::Ascending)
}

/// Shorthand for [`by_key`] with [`Direction::Descending`].
pub fn descending<T, K, F>(key: F) -> Comparator<T, impl Fn(&T, &T) -> Ordering>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    by_key(key, Direction::Descending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_reverses_descending() {
        assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
    }

    #[test]
    fn chained_comparator_uses_second_key_on_tie() {
        let cmp = ascending(|r: &(i32, i32)| r.0).then(descending(|r: &(i32, i32)| r.1));
        assert_eq!(cmp.compare(&(1, 5), &(1, 7)), Ordering::Greater);
        assert_eq!(cmp.compare(&(0, 5), &(1, 7)), Ordering::Less);
    }

    #[test]
    fn nan_keys_compare_equal() {
        let cmp = ascending(|x: &f64| *x);
        assert_eq!(cmp.compare(&f64::NAN, &1.0), Ordering::Equal);
    }
}
