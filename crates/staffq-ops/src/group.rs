//! Keyed groups produced by [`Query::group_by`](crate::Query::group_by).

use crate::aggregate::{self, Measure};
use crate::query::Query;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A set of rows sharing one grouping key.
///
/// Members keep the order they had in the grouped sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    /// The shared key
    pub key: K,

    /// Members in input order (never empty when produced by `group_by`)
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    /// Number of members.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Iterates over members in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Sum of a measure across members.
    pub fn sum_by<M: Measure>(&self, f: impl Fn(&T) -> M) -> M {
        aggregate::sum(self.items.iter().map(f))
    }

    /// Mean of a measure across members.
    pub fn average_by<M: Measure>(&self, f: impl Fn(&T) -> M) -> Option<M> {
        aggregate::average(self.items.iter().map(f))
    }

    /// Smallest value of `f` across members; the first one wins ties.
    pub fn min_by<V: PartialOrd>(&self, f: impl Fn(&T) -> V) -> Option<V> {
        self.items.iter().map(f).reduce(|best, v| if v < best { v } else { best })
    }

    /// Largest value of `f` across members; the first one wins ties.
    pub fn max_by<V: PartialOrd>(&self, f: impl Fn(&T) -> V) -> Option<V> {
        self.items.iter().map(f).reduce(|best, v| if v > best { v } else { best })
    }

    /// Number of distinct values of `f` across members.
    pub fn distinct_count_by<V: Eq + Hash>(&self, f: impl Fn(&T) -> V) -> usize {
        self.items.iter().map(f).collect::<HashSet<_>>().len()
    }

    /// Continues querying over this group's members.
    #[must_use]
    pub fn into_query(self) -> Query<T> {
        Query::new(self.items)
    }
}

impl<'a, K, T> IntoIterator for &'a Group<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Partitions `rows` by key.
///
/// Groups appear in the order their key was first seen; this is what makes
/// "first group after a stable sort" deterministic on ties.
pub(crate) fn group_rows<T, K, F>(rows: Vec<T>, key: F) -> Vec<Group<K, T>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for row in rows {
        let k = key(&row);
        match index.get(&k) {
            Some(&slot) => groups[slot].items.push(row),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(Group {
                    key: k,
                    items: vec![row],
                });
            }
        }
    }

    groups
}
