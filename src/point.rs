//! Point and query rectangle records.
//!
//! Both are plain `Copy` values. The index stores points by value inside its
//! secondary structures, so a built tree never borrows from the caller's input.

/// A point in the integer plane carrying a caller-defined identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate (primary dimension)
    pub x: i64,
    /// Y coordinate (secondary dimension)
    pub y: i64,
    /// Caller-defined identifier, not interpreted by the index
    pub id: u64,
}

impl Point {
    /// Creates a point with id `0`.
    ///
    /// # Example
    /// ```
    /// use rangetree::Point;
    /// let p = Point::new(3, 4);
    /// assert_eq!((p.x, p.y, p.id), (3, 4, 0));
    /// ```
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y, id: 0 }
    }

    /// Creates a point with an explicit id.
    pub const fn with_id(x: i64, y: i64, id: u64) -> Self {
        Self { x, y, id }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned query rectangle `[low.x, high.x] x [low.y, high.y]`.
///
/// Bounds are inclusive on both axes. Only the coordinates of the two corners are
/// used; their ids are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Query {
    /// Lower-left corner
    pub low: Point,
    /// Upper-right corner
    pub high: Point,
    /// Caller-defined identifier
    pub id: u64,
}

impl Query {
    /// Creates a query from its two corners.
    pub const fn new(low: Point, high: Point) -> Self {
        Self { low, high, id: 0 }
    }

    /// Creates a query from corner coordinates `(min_x, min_y, max_x, max_y)`.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Point, Query};
    /// let q = Query::from_bounds(0, 0, 10, 5);
    /// assert!(q.contains(&Point::new(10, 5)));
    /// assert!(!q.contains(&Point::new(11, 5)));
    /// ```
    pub const fn from_bounds(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Returns a square query of side `side` anchored at `low`.
    ///
    /// The upper corner saturates at `i64::MAX` instead of overflowing.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Point, Query};
    /// let q = Query::square(Point::new(i64::MAX - 1, 0), 10);
    /// assert_eq!((q.high.x, q.high.y), (i64::MAX, 10));
    /// ```
    pub const fn square(low: Point, side: i64) -> Self {
        Self::new(
            low,
            Point::new(low.x.saturating_add(side), low.y.saturating_add(side)),
        )
    }

    /// Whether the corners are ordered on both axes.
    pub const fn is_well_formed(&self) -> bool {
        self.low.x <= self.high.x && self.low.y <= self.high.y
    }

    /// Whether `point` lies inside the rectangle, edges included.
    pub const fn contains(&self, point: &Point) -> bool {
        self.low.x <= point.x
            && point.x <= self.high.x
            && self.low.y <= point.y
            && point.y <= self.high.y
    }
}
