//! The chainable query pipeline.
//!
//! [`Query`] holds an owned, ordered sequence of rows. Query over borrowed
//! data with [`Query::over`], which yields `Query<&T>` and leaves the source
//! slice untouched.

use crate::aggregate::{self, Measure};
use crate::compare::{Comparator, Direction, by_key};
use crate::group::{Group, group_rows};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// An ordered sequence of rows with relational operators.
///
/// Every operator consumes `self` and returns the derived sequence, so a
/// pipeline reads top to bottom like the query it expresses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query<T> {
    rows: Vec<T>,
}

impl<'a, T> Query<&'a T> {
    /// Starts a query over borrowed rows.
    #[must_use]
    pub fn over(rows: &'a [T]) -> Self {
        Self {
            rows: rows.iter().collect(),
        }
    }

    /// Clones the borrowed rows into an owned query.
    #[must_use]
    pub fn cloned(self) -> Query<T>
    where
        T: Clone,
    {
        self.select(Clone::clone)
    }
}

impl<T> Query<T> {
    /// Starts a query over owned rows.
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    // ---------------------------------------------------------------------
    // Sequence operators
    // ---------------------------------------------------------------------

    /// Keeps rows matching `predicate`, preserving order.
    #[must_use]
    pub fn filter(mut self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.rows.retain(|row| predicate(row));
        self
    }

    /// Projects every row through `f`.
    pub fn select<U>(self, f: impl FnMut(T) -> U) -> Query<U> {
        Query {
            rows: self.rows.into_iter().map(f).collect(),
        }
    }

    /// Projects every row into zero or more rows.
    pub fn select_many<U, I>(self, f: impl FnMut(T) -> I) -> Query<U>
    where
        I: IntoIterator<Item = U>,
    {
        Query {
            rows: self.rows.into_iter().flat_map(f).collect(),
        }
    }

    /// Partitions rows into groups sharing a key.
    ///
    /// Groups are ordered by first appearance of their key; members keep
    /// their input order.
    pub fn group_by<K, F>(self, key: F) -> Query<Group<K, T>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let input = self.rows.len();
        let groups = group_rows(self.rows, key);
        tracing::trace!(rows = input, groups = groups.len(), "group_by");
        Query { rows: groups }
    }

    /// Equality inner join.
    ///
    /// Emits `result(left, right)` for every pair with equal keys, ordered
    /// by left row and then by right row. Rows without a partner are
    /// dropped.
    pub fn inner_join<R, K, O>(
        self,
        right: impl IntoIterator<Item = R>,
        left_key: impl Fn(&T) -> K,
        right_key: impl Fn(&R) -> K,
        mut result: impl FnMut(&T, &R) -> O,
    ) -> Query<O>
    where
        K: Eq + Hash,
    {
        let mut buckets: HashMap<K, Vec<R>> = HashMap::new();
        for row in right {
            buckets.entry(right_key(&row)).or_default().push(row);
        }

        let mut rows = Vec::new();
        for left in &self.rows {
            if let Some(matches) = buckets.get(&left_key(left)) {
                rows.extend(matches.iter().map(|r| result(left, r)));
            }
        }

        tracing::trace!(left = self.rows.len(), output = rows.len(), "inner_join");
        Query { rows }
    }

    /// Cartesian product, left-major.
    ///
    /// Combine with [`filter`](Self::filter) for range joins that equality
    /// keys cannot express.
    pub fn cross_join<R, O>(
        self,
        right: impl IntoIterator<Item = R>,
        mut result: impl FnMut(&T, &R) -> O,
    ) -> Query<O> {
        let right: Vec<R> = right.into_iter().collect();
        let rows = self
            .rows
            .iter()
            .flat_map(|left| right.iter().map(move |r| (left, r)))
            .map(|(left, r)| result(left, r))
            .collect();
        Query { rows }
    }

    /// Stable sort by a comparator.
    #[must_use]
    pub fn order_by<F>(mut self, comparator: Comparator<T, F>) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.rows.sort_by(|a, b| comparator.compare(a, b));
        self
    }

    /// Stable sort by a single key.
    #[must_use]
    pub fn order_by_key<K: PartialOrd>(self, key: impl Fn(&T) -> K, direction: Direction) -> Self {
        self.order_by(by_key(key, direction))
    }

    /// Drops repeated rows, keeping the first occurrence.
    #[must_use]
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by(Clone::clone)
    }

    /// Drops rows whose key was already seen, keeping the first occurrence.
    #[must_use]
    pub fn distinct_by<K: Eq + Hash>(mut self, key: impl Fn(&T) -> K) -> Self {
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(key(row)));
        self
    }

    /// Keeps at most the first `n` rows.
    #[must_use]
    pub fn take(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Drops the first `n` rows.
    #[must_use]
    pub fn skip(mut self, n: usize) -> Self {
        let n = n.min(self.rows.len());
        self.rows.drain(..n);
        self
    }

    /// Combines each row with its successor.
    ///
    /// A sequence of `n` rows yields `n - 1` results; fewer than two rows
    /// yield none.
    pub fn pairwise<U>(self, mut f: impl FnMut(&T, &T) -> U) -> Query<U> {
        Query {
            rows: self.rows.windows(2).map(|w| f(&w[0], &w[1])).collect(),
        }
    }

    // ---------------------------------------------------------------------
    // Scalar reductions
    // ---------------------------------------------------------------------

    /// Number of rows.
    #[must_use]
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sequence has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of a measure over all rows; zero when empty.
    pub fn sum_by<M: Measure>(&self, f: impl Fn(&T) -> M) -> M {
        aggregate::sum(self.rows.iter().map(f))
    }

    /// Mean of a measure over all rows.
    pub fn average_by<M: Measure>(&self, f: impl Fn(&T) -> M) -> Option<M> {
        aggregate::average(self.rows.iter().map(f))
    }

    /// Smallest value of `f`; the first one wins ties.
    pub fn min_by<V: PartialOrd>(&self, f: impl Fn(&T) -> V) -> Option<V> {
        self.rows.iter().map(f).reduce(|best, v| if v < best { v } else { best })
    }

    /// Largest value of `f`; the first one wins ties.
    pub fn max_by<V: PartialOrd>(&self, f: impl Fn(&T) -> V) -> Option<V> {
        self.rows.iter().map(f).reduce(|best, v| if v > best { v } else { best })
    }

    /// Whether any row matches.
    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.iter().any(predicate)
    }

    /// Whether every row matches. True for an empty sequence.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.iter().all(predicate)
    }

    /// Whether `value` is one of the rows.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.rows.contains(value)
    }

    /// The first row, if any.
    #[must_use]
    pub fn first(self) -> Option<T> {
        self.rows.into_iter().next()
    }

    /// Borrows the rows in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Finishes the pipeline.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.rows
    }
}

impl<T> FromIterator<T> for Query<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Query<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Query<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
