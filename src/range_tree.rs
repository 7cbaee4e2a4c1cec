//! Two-level range tree whose secondary structures are y-keyed search trees.
//!
//! Each primary node owns a [`YNode`] tree holding every point of its subtree. A query
//! walks the two boundary paths below the split node and range-searches the y-tree of
//! every canonical subtree it passes, giving `O(log^2 n + k)` per query.

use crate::error::{Result, RangeTreeError, check_rectangle};
use crate::point::{Point, Query};
use crate::primary::{self, PrimaryNode};
use crate::stats::TreeStats;
use crate::ytree::{self, YNode};

/// How the secondary y-trees are derived from the children's trees during a build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BuildStrategy {
    /// Rebuild the larger child's tree balanced, then insert the smaller child's points
    /// one by one. `O(n log^2 n)` total; kept as a performance baseline.
    Naive,
    /// Merge both children's y-sorted sequences and rebuild balanced. `O(n log n)` total.
    #[default]
    Sorted,
}

/// Node of the primary tree.
#[derive(Clone, Debug)]
pub(crate) struct XNode {
    pub(crate) x_key: i64,
    pub(crate) left: Option<Box<XNode>>,
    pub(crate) right: Option<Box<XNode>>,
    pub(crate) ytree: Option<Box<YNode>>,
}

impl PrimaryNode for XNode {
    #[inline]
    fn x_key(&self) -> i64 {
        self.x_key
    }

    #[inline]
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[inline]
    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl XNode {
    fn leaf(point: Point) -> Self {
        Self {
            x_key: point.x,
            left: None,
            right: None,
            ytree: Some(Box::new(YNode::leaf(point))),
        }
    }

    fn join(x_key: i64, left: Self, right: Self, strategy: BuildStrategy) -> Self {
        let (l, r) = (left.ytree.as_deref(), right.ytree.as_deref());
        let ytree = match strategy {
            BuildStrategy::Naive => ytree::naive_merge(l, r),
            BuildStrategy::Sorted => ytree::merge_rebuild(l, r),
        };
        Self {
            x_key,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            ytree,
        }
    }

    fn report(&self, y1: i64, y2: i64, out: &mut Vec<Point>) {
        ytree::report_range(self.ytree.as_deref(), y1, y2, out);
    }
}

/// Static range tree answering inclusive rectangle queries.
///
/// Immutable once built; any number of threads may query a shared reference.
///
/// # Example
/// ```
/// use rangetree::{Point, RangeTree};
///
/// let mut points = vec![Point::new(1, 5), Point::new(3, 2), Point::new(7, 9), Point::new(4, 4)];
/// points.sort_by_key(|p| p.x);
///
/// let tree = RangeTree::build_sorted(&points)?;
/// let mut found = tree.query(&Point::new(2, 1), &Point::new(6, 6))?;
/// found.sort_by_key(|p| p.x);
/// assert_eq!(found, vec![Point::new(3, 2), Point::new(4, 4)]);
/// # Ok::<(), rangetree::RangeTreeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RangeTree {
    pub(crate) root: Option<XNode>,
    num_items: usize,
    strategy: BuildStrategy,
}

impl RangeTree {
    /// Builds a tree from points sorted ascending by x.
    ///
    /// The input order is not checked in release builds; unsorted input gives wrong
    /// query results.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::EmptyInput`] if `points` is empty.
    pub fn build(points: &[Point], strategy: BuildStrategy) -> Result<Self> {
        if points.is_empty() {
            return Err(RangeTreeError::EmptyInput);
        }
        debug_assert!(
            points.is_sorted_by_key(|p| p.x),
            "points must be sorted ascending by x"
        );

        let join =
            |x_key: i64, left: XNode, right: XNode| XNode::join(x_key, left, right, strategy);
        let root = primary::build_balanced(points, &XNode::leaf, &join);
        let tree = Self {
            root: Some(root),
            num_items: points.len(),
            strategy,
        };
        log::debug!(
            "built {:?} range tree: {} points, height {}",
            strategy,
            tree.num_items,
            tree.height()
        );
        Ok(tree)
    }

    /// Builds a tree with [`BuildStrategy::Naive`].
    ///
    /// # Errors
    /// Returns [`RangeTreeError::EmptyInput`] if `points` is empty.
    pub fn build_naive(points: &[Point]) -> Result<Self> {
        Self::build(points, BuildStrategy::Naive)
    }

    /// Builds a tree with [`BuildStrategy::Sorted`].
    ///
    /// # Errors
    /// Returns [`RangeTreeError::EmptyInput`] if `points` is empty.
    pub fn build_sorted(points: &[Point]) -> Result<Self> {
        Self::build(points, BuildStrategy::Sorted)
    }

    /// Returns the number of indexed points
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns whether the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Strategy the secondary trees were built with
    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Number of levels of the primary tree
    pub fn height(&self) -> usize {
        primary::height(self.root.as_ref())
    }

    /// Number of levels of the root's secondary tree.
    ///
    /// For [`BuildStrategy::Sorted`] this is `ceil(log2(n + 1))`; naive builds are
    /// usually deeper.
    pub fn secondary_depth(&self) -> usize {
        self.root
            .as_ref()
            .map_or(0, |root| ytree::depth(root.ytree.as_deref()))
    }

    /// Size and shape summary of the built structure.
    pub fn stats(&self) -> TreeStats {
        let mut secondary_entries = 0;
        primary::for_each_node(self.root.as_ref(), &mut |node: &XNode| {
            secondary_entries += ytree::count(node.ytree.as_deref());
        });
        TreeStats {
            points: self.num_items,
            height: self.height(),
            secondary_depth: self.secondary_depth(),
            secondary_entries,
        }
    }

    /// Returns every point inside `[low.x, high.x] x [low.y, high.y]`.
    ///
    /// Results are grouped by canonical subtree and are not sorted.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidRectangle`] if `low` exceeds `high` on either axis.
    pub fn query(&self, low: &Point, high: &Point) -> Result<Vec<Point>> {
        let mut results = Vec::new();
        self.query_into(low, high, &mut results)?;
        Ok(results)
    }

    /// Same as [`RangeTree::query`] for a [`Query`] value.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidRectangle`] if the query corners are out of order.
    pub fn query_rect(&self, query: &Query) -> Result<Vec<Point>> {
        self.query(&query.low, &query.high)
    }

    /// Clears `results` and fills it with every point inside the rectangle.
    ///
    /// Lets callers reuse one buffer across many queries.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidRectangle`] if `low` exceeds `high` on either axis.
    pub fn query_into(
        &self,
        low: &Point,
        high: &Point,
        results: &mut Vec<Point>,
    ) -> Result<()> {
        check_rectangle(low, high)?;
        results.clear();
        let Some(root) = self.root.as_ref() else {
            return Ok(());
        };

        let split = primary::find_split_node(root, low.x, high.x);
        log::trace!(
            "split node x_key={} for x in [{}, {}]",
            split.x_key,
            low.x,
            high.x
        );

        if split.is_leaf() {
            if low.x <= split.x_key && split.x_key <= high.x {
                split.report(low.y, high.y, results);
            }
            return Ok(());
        }

        walk_left_boundary(split.left(), low, high, results);
        walk_right_boundary(split.right(), low, high, results);
        Ok(())
    }
}

/// Walks from `split.left` towards `x1`.
///
/// Where the path turns left, the right child lies fully inside `[x1, x2]` and its
/// y-tree is reported as a canonical subtree.
fn walk_left_boundary(
    mut node: Option<&XNode>,
    low: &Point,
    high: &Point,
    out: &mut Vec<Point>,
) {
    while let Some(current) = node {
        if current.is_leaf() {
            if low.x <= current.x_key && current.x_key <= high.x {
                current.report(low.y, high.y, out);
            }
            return;
        }
        if current.x_key < low.x {
            node = current.right();
        } else {
            if let Some(canonical) = current.right() {
                canonical.report(low.y, high.y, out);
            }
            node = current.left();
        }
    }
}

/// Walks from `split.right` towards `x2`, reporting left children where the path turns
/// right.
fn walk_right_boundary(
    mut node: Option<&XNode>,
    low: &Point,
    high: &Point,
    out: &mut Vec<Point>,
) {
    while let Some(current) = node {
        if current.is_leaf() {
            if low.x <= current.x_key && current.x_key <= high.x {
                current.report(low.y, high.y, out);
            }
            return;
        }
        if current.x_key > high.x {
            node = current.left();
        } else {
            if let Some(canonical) = current.left() {
                canonical.report(low.y, high.y, out);
            }
            node = current.right();
        }
    }
}
