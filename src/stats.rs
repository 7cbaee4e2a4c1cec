//! Shape and size summary of a built index.

use std::fmt;

/// Summary returned by `stats()` on both tree types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of indexed points
    pub points: usize,
    /// Levels in the primary tree
    pub height: usize,
    /// Levels in the root's secondary structure (1 for flat cascaded arrays)
    pub secondary_depth: usize,
    /// Secondary elements summed over every primary node
    pub secondary_entries: usize,
}

impl TreeStats {
    /// Average number of secondary copies stored per point.
    ///
    /// Equals the primary height for a tree whose leaves are all on the last level.
    pub fn copies_per_point(&self) -> f64 {
        if self.points == 0 {
            0.0
        } else {
            self.secondary_entries as f64 / self.points as f64
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "points={} height={} secondary_depth={} secondary_entries={} ({:.2} per point)",
            self.points,
            self.height,
            self.secondary_depth,
            self.secondary_entries,
            self.copies_per_point()
        )
    }
}
