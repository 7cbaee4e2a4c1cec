//! Error types for building and querying range trees.

use crate::point::{Point, Query};
use thiserror::Error;

/// Errors reported by range tree construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RangeTreeError {
    /// Construction was called with no points.
    #[error("cannot build a range tree from an empty point set")]
    EmptyInput,

    /// The query corners are out of order on at least one axis.
    #[error(
        "invalid query rectangle: low ({}, {}) is not below high ({}, {})",
        .low.x, .low.y, .high.x, .high.y
    )]
    InvalidRectangle {
        /// Lower corner as supplied
        low: Point,
        /// Upper corner as supplied
        high: Point,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RangeTreeError>;

/// Validates rectangle corners before a query walks the tree.
pub(crate) fn check_rectangle(low: &Point, high: &Point) -> Result<()> {
    if Query::new(*low, *high).is_well_formed() {
        Ok(())
    } else {
        log::debug!(
            "rejecting query: low=({}, {}) high=({}, {})",
            low.x,
            low.y,
            high.x,
            high.y
        );
        Err(RangeTreeError::InvalidRectangle {
            low: *low,
            high: *high,
        })
    }
}
