//! # rangetree - Static 2D Range Trees
//!
//! Orthogonal range searching over a fixed set of integer points: report every point
//! with `x` in `[x1, x2]` and `y` in `[y1, y2]`.
//!
//! ## Features
//!
//! - **Two-level range tree**: balanced primary tree over x, each node carrying its
//!   subtree's points ordered by y
//! - **Three builds**: naive insertion baseline, merge-based `O(n log n)` build, and a
//!   fractional-cascading build
//! - **Fractional cascading**: queries in `O(log n + k)` instead of `O(log^2 n + k)`
//! - **Static**: built once from x-sorted points, read-only afterwards and safe to share
//!   across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use rangetree::prelude::*;
//!
//! let mut points = vec![
//!     Point::new(1, 5),
//!     Point::new(3, 2),
//!     Point::new(7, 9),
//!     Point::new(4, 4),
//! ];
//! // Construction expects points sorted ascending by x
//! points.sort_by_key(|p| p.x);
//!
//! let tree = RangeTree::build(&points, BuildStrategy::Sorted)?;
//! let cascaded = CascadedRangeTree::build(&points)?;
//!
//! let (low, high) = (Point::new(2, 1), Point::new(6, 6));
//! let mut found = tree.query(&low, &high)?;
//! found.sort();
//! assert_eq!(found, vec![Point::new(3, 2), Point::new(4, 4)]);
//!
//! // Reuse a buffer across queries
//! let mut results = Vec::new();
//! cascaded.query_into(&low, &high, &mut results)?;
//! assert_eq!(results.len(), 2);
//!
//! // Corners out of order are rejected
//! assert!(tree.query(&high, &low).is_err());
//! # Ok::<(), RangeTreeError>(())
//! ```
//!
//! ## How It Works
//!
//! The primary tree splits the x-sorted points at the median until single points
//! remain, so its shape depends only on `n`. Every node's secondary structure is built
//! from its two children's:
//!
//! - [`BuildStrategy::Naive`] rebuilds the larger child's y-tree and inserts the
//!   smaller child's points one by one
//! - [`BuildStrategy::Sorted`] merges both y-sorted sequences and rebuilds balanced
//! - [`CascadedRangeTree`] merges flat y-arrays and stores, per entry, the index of the
//!   first entry not below it in each child's array
//!
//! A query finds the split node where the searches for `x1` and `x2` diverge, then walks
//! both boundary paths and reports the canonical subtrees hanging off them. The tree form
//! range-searches each canonical y-tree; the cascaded form binary-searches once at the
//! split node and follows bridges from there.

pub mod cascade;
pub mod error;
pub mod point;
pub mod prelude;
pub mod range_tree;
pub mod stats;

mod merge;
mod primary;
mod ytree;

mod integration_test;

pub use cascade::{CascadeEntry, CascadedRangeTree};
pub use error::{RangeTreeError, Result};
pub use point::{Point, Query};
pub use range_tree::{BuildStrategy, RangeTree};
pub use stats::TreeStats;
