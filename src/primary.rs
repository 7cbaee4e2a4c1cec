//! Shared shape of the primary (x) tree.
//!
//! Both index variants use the same balanced tree over x: the node for a run of
//! x-sorted points takes the median's x as its key, the left child covers the run up
//! to and including the median, and the right child covers the rest. The shape depends
//! only on the number of points, so every leaf holds exactly one point and the height
//! is `ceil(log2 n)`.

use crate::point::Point;

/// Read access to a primary tree node, implemented by both node variants.
pub(crate) trait PrimaryNode: Sized {
    fn x_key(&self) -> i64;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    #[inline]
    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

/// Builds a balanced primary tree over a non-empty, x-sorted slice.
///
/// `leaf` turns a single point into a leaf node; `join` receives the median key and
/// the two finished children and derives the parent's secondary structure from them.
/// Children are always built before their parent.
pub(crate) fn build_balanced<N, L, J>(points: &[Point], leaf: &L, join: &J) -> N
where
    L: Fn(Point) -> N,
    J: Fn(i64, N, N) -> N,
{
    debug_assert!(!points.is_empty(), "primary build needs at least one point");
    if points.len() == 1 {
        return leaf(points[0]);
    }
    let m = (points.len() - 1) / 2;
    let left = build_balanced(&points[..=m], leaf, join);
    let right = build_balanced(&points[m + 1..], leaf, join);
    join(points[m].x, left, right)
}

/// Finds the node where the search paths for `x1` and `x2` diverge.
///
/// Descends while the current node is internal and its key lies outside `[x1, x2]`.
/// The returned node is either a leaf or an internal node whose key is in range.
pub(crate) fn find_split_node<N: PrimaryNode>(root: &N, x1: i64, x2: i64) -> &N {
    let mut node = root;
    loop {
        if node.is_leaf() || (x1 <= node.x_key() && node.x_key() <= x2) {
            return node;
        }
        let next = if node.x_key() < x1 {
            node.right()
        } else {
            node.left()
        };
        match next {
            Some(child) => node = child,
            None => return node,
        }
    }
}

/// Number of levels in the tree rooted at `root` (a single leaf has height 1).
pub(crate) fn height<N: PrimaryNode>(root: Option<&N>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

/// Calls `visit` on every node of the tree, parents before children.
pub(crate) fn for_each_node<N: PrimaryNode>(root: Option<&N>, visit: &mut impl FnMut(&N)) {
    if let Some(node) = root {
        visit(node);
        for_each_node(node.left(), visit);
        for_each_node(node.right(), visit);
    }
}
