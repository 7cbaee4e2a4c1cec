//! Secondary structure in tree form: a binary search tree of points keyed by y.
//!
//! Used by the naive and sorted variants. Trees built by [`YNode::from_sorted`] are
//! balanced, but the naive variant inserts points one at a time afterwards and can
//! produce long chains. Every walk over a whole tree (flatten, report, count, depth)
//! therefore uses an explicit stack instead of recursion.

use crate::merge::merge_by_y;
use crate::point::Point;

/// Node of a y-keyed binary search tree.
///
/// Points with equal y may sit on either side of each other after insertion; the
/// in-order sequence is always sorted ascending by y.
#[derive(Clone, Debug)]
pub(crate) struct YNode {
    pub(crate) point: Point,
    pub(crate) left: Option<Box<YNode>>,
    pub(crate) right: Option<Box<YNode>>,
}

impl YNode {
    pub(crate) fn leaf(point: Point) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }

    /// Builds a balanced tree from points sorted ascending by y.
    ///
    /// Recursion depth is `log2(points.len())`.
    pub(crate) fn from_sorted(points: &[Point]) -> Option<Box<Self>> {
        if points.is_empty() {
            return None;
        }
        let m = (points.len() - 1) / 2;
        Some(Box::new(Self {
            point: points[m],
            left: Self::from_sorted(&points[..m]),
            right: Self::from_sorted(&points[m + 1..]),
        }))
    }
}

/// Inserts `point` below `root` without rebalancing.
///
/// Descends right when the new y is strictly greater than the node's y, left
/// otherwise (ties go left).
pub(crate) fn insert(root: &mut Option<Box<YNode>>, point: Point) {
    let mut slot = root;
    while let Some(node) = slot {
        slot = if point.y > node.point.y {
            &mut node.right
        } else {
            &mut node.left
        };
    }
    *slot = Some(Box::new(YNode::leaf(point)));
}

/// Returns the points of the tree in order, ascending by y.
pub(crate) fn flatten(root: Option<&YNode>) -> Vec<Point> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut cursor = root;
    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = node.left.as_deref();
        }
        let Some(node) = stack.pop() else {
            return out;
        };
        out.push(node.point);
        cursor = node.right.as_deref();
    }
}

/// Appends to `out` every point with `y1 <= y <= y2`, in ascending y order.
///
/// Subtrees that cannot hold a match are skipped: the left child is visited only when
/// `y1 <= node.y`, the right child only when `y2 >= node.y`. Keys equal to a node's y
/// can sit in either subtree, so both comparisons are inclusive.
pub(crate) fn report_range(root: Option<&YNode>, y1: i64, y2: i64, out: &mut Vec<Point>) {
    let mut stack = Vec::new();
    let mut cursor = root;
    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = if y1 <= node.point.y {
                node.left.as_deref()
            } else {
                None
            };
        }
        let Some(node) = stack.pop() else {
            return;
        };
        if y1 <= node.point.y && node.point.y <= y2 {
            out.push(node.point);
        }
        cursor = if y2 >= node.point.y {
            node.right.as_deref()
        } else {
            None
        };
    }
}

/// Number of nodes in the tree.
pub(crate) fn count(root: Option<&YNode>) -> usize {
    let mut total = 0;
    let mut stack: Vec<&YNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        total += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    total
}

/// Number of levels in the tree (0 for an empty tree).
pub(crate) fn depth(root: Option<&YNode>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&YNode, usize)> = root.map(|node| (node, 1)).into_iter().collect();
    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(node.left.as_deref().map(|child| (child, level + 1)));
        stack.extend(node.right.as_deref().map(|child| (child, level + 1)));
    }
    deepest
}

/// Sorted-variant combine: merge both children's sequences and rebuild balanced.
pub(crate) fn merge_rebuild(left: Option<&YNode>, right: Option<&YNode>) -> Option<Box<YNode>> {
    let merged = merge_by_y(&flatten(left), &flatten(right));
    YNode::from_sorted(&merged)
}

/// Naive-variant combine: rebuild the larger child's tree, then insert every point of
/// the smaller one individually. When both children are the same size the right
/// child's tree is rebuilt.
pub(crate) fn naive_merge(left: Option<&YNode>, right: Option<&YNode>) -> Option<Box<YNode>> {
    let left_points = flatten(left);
    let right_points = flatten(right);
    let (base, extra) = if left_points.len() > right_points.len() {
        (left_points, right_points)
    } else {
        (right_points, left_points)
    };
    let mut root = YNode::from_sorted(&base);
    for point in extra {
        insert(&mut root, point);
    }
    root
}
