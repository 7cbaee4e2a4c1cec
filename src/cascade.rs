//! Range tree with fractional cascading.
//!
//! Every primary node stores its subtree's points as a flat array sorted by y. Each
//! entry also records two bridges: the index of the first entry in the left child's
//! array, and in the right child's array, whose y is not below the entry's own y.
//!
//! A query binary-searches only the split node's array for the first `y >= y1`. From
//! there each step down the boundary paths follows a bridge in `O(1)`, and a canonical
//! subtree is reported by scanning its array forward from the bridged index while
//! `y <= y2`. Total cost is `O(log n + k)`.

use crate::error::{Result, RangeTreeError, check_rectangle};
use crate::merge::merge_by_y;
use crate::point::{Point, Query};
use crate::primary::{self, PrimaryNode};
use crate::stats::TreeStats;

/// Entry of a cascaded y-array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeEntry {
    /// The stored point
    pub point: Point,
    /// First index in the left child's array with `y >= point.y`, if any
    pub left_bridge: Option<usize>,
    /// First index in the right child's array with `y >= point.y`, if any
    pub right_bridge: Option<usize>,
}

impl CascadeEntry {
    const fn unlinked(point: Point) -> Self {
        Self {
            point,
            left_bridge: None,
            right_bridge: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

/// Node of the cascaded primary tree.
#[derive(Clone, Debug)]
pub(crate) struct CNode {
    pub(crate) x_key: i64,
    pub(crate) left: Option<Box<CNode>>,
    pub(crate) right: Option<Box<CNode>>,
    pub(crate) entries: Vec<CascadeEntry>,
}

impl PrimaryNode for CNode {
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

impl CNode {
    fn leaf(point: Point) -> Self {
        Self {
            x_key: point.x,
            left: None,
            right: None,
            entries: vec![CascadeEntry::unlinked(point)],
        }
    }

    fn join(x_key: i64, left: Self, right: Self) -> Self {
        let entries = cascade(&left.entries, &right.entries);
        Self {
            x_key,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            entries,
        }
    }

    /// Appends entries from `start` onward while `y <= y2`.
    ///
    /// `start` must already be the first entry with `y >= y1`.
    #[inline]
    fn report_from(&self, start: usize, y2: i64, out: &mut Vec<Point>) {
        let tail = self.entries.get(start..).unwrap_or_default();
        out.extend(
            tail.iter()
                .take_while(|entry| entry.point.y <= y2)
                .map(|entry| entry.point),
        );
    }
}

/// Merges two children's arrays and links every merged entry back into both.
fn cascade(left: &[CascadeEntry], right: &[CascadeEntry]) -> Vec<CascadeEntry> {
    let left_points: Vec<Point> = left.iter().map(|entry| entry.point).collect();
    let right_points: Vec<Point> = right.iter().map(|entry| entry.point).collect();
    let mut merged: Vec<CascadeEntry> = merge_by_y(&left_points, &right_points)
        .into_iter()
        .map(CascadeEntry::unlinked)
        .collect();
    link_bridges(&mut merged, left, Side::Left);
    link_bridges(&mut merged, right, Side::Right);
    merged
}

/// Sets one bridge column of `merged` against `child` in a single forward scan.
///
/// Both arrays are sorted by y, so the child cursor never moves backwards.
fn link_bridges(merged: &mut [CascadeEntry], child: &[CascadeEntry], side: Side) {
    let mut i = 0;
    for entry in merged.iter_mut() {
        while i < child.len() && child[i].point.y < entry.point.y {
            i += 1;
        }
        let bridge = (i < child.len()).then_some(i);
        match side {
            Side::Left => entry.left_bridge = bridge,
            Side::Right => entry.right_bridge = bridge,
        }
    }
}

/// Static range tree using fractional cascading between y-arrays.
///
/// Same query semantics as [`RangeTree`](crate::RangeTree), with `O(log n + k)`
/// query time.
///
/// # Example
/// ```
/// use rangetree::{CascadedRangeTree, Point};
///
/// let points = vec![Point::new(1, 5), Point::new(3, 2), Point::new(4, 4), Point::new(7, 9)];
/// let tree = CascadedRangeTree::build(&points)?;
///
/// let found = tree.query(&Point::new(3, 0), &Point::new(10, 10))?;
/// assert_eq!(found.len(), 3);
/// # Ok::<(), rangetree::RangeTreeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CascadedRangeTree {
    pub(crate) root: Option<CNode>,
    num_items: usize,
}

impl CascadedRangeTree {
    /// Builds a cascaded tree from points sorted ascending by x.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::EmptyInput`] if `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(RangeTreeError::EmptyInput);
        }
        debug_assert!(
            points.is_sorted_by_key(|p| p.x),
            "points must be sorted ascending by x"
        );

        let root = primary::build_balanced(points, &CNode::leaf, &CNode::join);
        let tree = Self {
            root: Some(root),
            num_items: points.len(),
        };
        log::debug!(
            "built cascaded range tree: {} points, height {}",
            tree.num_items,
            tree.height()
        );
        Ok(tree)
    }

    /// Returns the number of indexed points
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns whether the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Number of levels of the primary tree
    pub fn height(&self) -> usize {
        primary::height(self.root.as_ref())
    }

    /// The root's y-array: every point ascending by y, with bridges into its children.
    pub fn root_entries(&self) -> &[CascadeEntry] {
        self.root
            .as_ref()
            .map(|root| root.entries.as_slice())
            .unwrap_or_default()
    }

    /// Size and shape summary of the built structure.
    ///
    /// The cascaded arrays are flat, so `secondary_depth` is always 1 for a
    /// non-empty tree.
    pub fn stats(&self) -> TreeStats {
        let mut secondary_entries = 0;
        primary::for_each_node(self.root.as_ref(), &mut |node: &CNode| {
            secondary_entries += node.entries.len();
        });
        TreeStats {
            points: self.num_items,
            height: self.height(),
            secondary_depth: usize::from(self.root.is_some()),
            secondary_entries,
        }
    }

    /// Returns every point inside `[low.x, high.x] x [low.y, high.y]`.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidRectangle`] if `low` exceeds `high` on either axis.
    pub fn query(&self, low: &Point, high: &Point) -> Result<Vec<Point>> {
        let mut results = Vec::new();
        self.query_into(low, high, &mut results)?;
        Ok(results)
    }

    /// Same as [`CascadedRangeTree::query`] for a [`Query`] value.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvalidRectangle`] if the query corners are out of order.
    pub fn query_rect(&self, query: &Query) -> Result<Vec<Point>> {
        self.query(&query.low, &query.high)
    }

    /// Clears `results` and fills it with every point inside the rectangle.
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
        // The only binary search of the query.
        let artic = split.entries.partition_point(|entry| entry.point.y < low.y);
        log::trace!(
            "split node x_key={} anchor {}/{}",
            split.x_key,
            artic,
            split.entries.len()
        );
        let Some(anchor) = split.entries.get(artic) else {
            // Every point below the split lies under y1.
            return Ok(());
        };

        if split.is_leaf() {
            if low.x <= split.x_key && split.x_key <= high.x {
                split.report_from(artic, high.y, results);
            }
            return Ok(());
        }

        walk_left_boundary(split.left(), anchor.left_bridge, low, high, results);
        walk_right_boundary(split.right(), anchor.right_bridge, low, high, results);
        Ok(())
    }
}

/// Walks from `split.left` towards `x1`, carrying the anchor index down via bridges.
///
/// A missing bridge means no entry below has `y >= y1`, so the walk stops.
fn walk_left_boundary(
    mut node: Option<&CNode>,
    mut artic: Option<usize>,
    low: &Point,
    high: &Point,
    out: &mut Vec<Point>,
) {
    while let (Some(current), Some(index)) = (node, artic) {
        if current.is_leaf() {
            if low.x <= current.x_key && current.x_key <= high.x {
                current.report_from(index, high.y, out);
            }
            return;
        }
        let entry = &current.entries[index];
        if current.x_key < low.x {
            node = current.right();
            artic = entry.right_bridge;
        } else {
            if let (Some(canonical), Some(start)) = (current.right(), entry.right_bridge) {
                canonical.report_from(start, high.y, out);
            }
            node = current.left();
            artic = entry.left_bridge;
        }
    }
}

/// Mirror of [`walk_left_boundary`] from `split.right` towards `x2`.
fn walk_right_boundary(
    mut node: Option<&CNode>,
    mut artic: Option<usize>,
    low: &Point,
    high: &Point,
    out: &mut Vec<Point>,
) {
    while let (Some(current), Some(index)) = (node, artic) {
        if current.is_leaf() {
            if low.x <= current.x_key && current.x_key <= high.x {
                current.report_from(index, high.y, out);
            }
            return;
        }
        let entry = &current.entries[index];
        if current.x_key > high.x {
            node = current.left();
            artic = entry.left_bridge;
        } else {
            if let (Some(canonical), Some(start)) = (current.left(), entry.left_bridge) {
                canonical.report_from(start, high.y, out);
            }
            node = current.right();
            artic = entry.right_bridge;
        }
    }
}
