//! Two-pointer merge of y-sorted point runs.

use crate::point::Point;

/// Merges two slices sorted ascending by `y` into one sorted vector.
///
/// When `left[i].y == right[j].y` the point from `right` is taken first. Once one
/// side is exhausted the remainder of the other is appended unchanged.
pub(crate) fn merge_by_y(left: &[Point], right: &[Point]) -> Vec<Point> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i].y < right[j].y {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
