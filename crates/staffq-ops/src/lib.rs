//! Composable, pure query operators over in-memory sequences.
//!
//! A [`Query`] owns an ordered sequence of rows and offers chainable
//! relational operators: selection, projection, grouping with per-group
//! aggregation, equality and cross joins, stable ordering, deduplication,
//! pagination, pairwise adjacency and scalar reduction. Every operator
//! consumes the query and yields a new one; source collections are never
//! touched.
//!
//! ```
//! use staffq_ops::{Direction, Query};
//!
//! let totals: Vec<(&str, usize)> = Query::new(vec!["b", "a", "b", "c", "b"])
//!     .group_by(|s| *s)
//!     .select(|g| (g.key, g.count()))
//!     .order_by_key(|(_, n)| *n, Direction::Descending)
//!     .into_vec();
//!
//! assert_eq!(totals[0], ("b", 3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod compare;
pub mod error;
pub mod group;
pub mod query;
pub mod writer;

pub use aggregate::{Measure, round_half_away};
pub use compare::{Comparator, Direction, ascending, descending};
pub use error::{Error, Result};
pub use group::Group;
pub use query::Query;
pub use writer::JsonlWriter;
