#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    fn sort_xy(points: Vec<Point>) -> Vec<(i64, i64)> {
        let mut coords: Vec<(i64, i64)> = points.iter().map(|p| (p.x, p.y)).collect();
        coords.sort_unstable();
        coords
    }

    /// Runs one rectangle through all three variants and checks they agree.
    fn query_all(points: &[Point], low: Point, high: Point) -> Vec<(i64, i64)> {
        let naive = RangeTree::build_naive(points).expect("non-empty input");
        let sorted = RangeTree::build_sorted(points).expect("non-empty input");
        let cascaded = CascadedRangeTree::build(points).expect("non-empty input");

        let from_naive = sort_xy(naive.query(&low, &high).expect("valid rectangle"));
        let from_sorted = sort_xy(sorted.query(&low, &high).expect("valid rectangle"));
        let from_cascaded = sort_xy(cascaded.query(&low, &high).expect("valid rectangle"));
        assert_eq!(from_naive, from_sorted, "naive and sorted variants disagree");
        assert_eq!(from_sorted, from_cascaded, "sorted and cascaded variants disagree");
        from_cascaded
    }

    #[test]
    fn test_four_point_scenario() {
        let mut points = vec![
            Point::new(1, 5),
            Point::new(3, 2),
            Point::new(7, 9),
            Point::new(4, 4),
        ];
        points.sort_by_key(|p| p.x);
        assert_eq!(
            points,
            vec![Point::new(1, 5), Point::new(3, 2), Point::new(4, 4), Point::new(7, 9)]
        );

        let found = query_all(&points, Point::new(2, 1), Point::new(6, 6));
        assert_eq!(found, vec![(3, 2), (4, 4)]);
    }

    #[test]
    fn test_single_point_scenario() {
        let points = [Point::new(5, 5)];
        assert_eq!(query_all(&points, Point::new(0, 0), Point::new(10, 10)), vec![(5, 5)]);
        assert!(query_all(&points, Point::new(6, 6), Point::new(10, 10)).is_empty());
        // Inside on x, outside on y
        assert!(query_all(&points, Point::new(0, 6), Point::new(10, 10)).is_empty());
    }

    #[test]
    fn test_boundary_inclusive() {
        let points = [Point::new(1, 1), Point::new(3, 3), Point::new(12, 4)];
        let found = query_all(&points, Point::new(3, 0), Point::new(10, 10));
        assert_eq!(found, vec![(3, 3)]);

        // Every edge of the rectangle touches a point
        let points = [
            Point::new(0, 5),
            Point::new(5, 0),
            Point::new(5, 10),
            Point::new(10, 5),
            Point::new(11, 5),
        ];
        let found = query_all(&points, Point::new(0, 0), Point::new(10, 10));
        assert_eq!(found, vec![(0, 5), (5, 0), (5, 10), (10, 5)]);
    }

    #[test]
    fn test_rectangle_missing_everything() {
        let points: Vec<Point> = (0..10).map(|i| Point::new(i, i)).collect();
        assert!(query_all(&points, Point::new(20, 20), Point::new(30, 30)).is_empty());
        assert!(query_all(&points, Point::new(-9, -9), Point::new(-1, -1)).is_empty());
        // x range covers points but y range sits in a gap of the diagonal
        assert!(query_all(&points, Point::new(0, 5), Point::new(4, 9)).is_empty());
    }

    #[test]
    fn test_leaf_split_reports_only_its_point() {
        // Split search ends at the leaf x=5 after passing the root's key 1
        let points = [Point::new(1, 3), Point::new(5, 3)];
        assert_eq!(query_all(&points, Point::new(3, 0), Point::new(6, 6)), vec![(5, 3)]);
    }

    #[test]
    fn test_repeated_y_on_both_bounds() {
        // Several points share y = 2 (the lower bound) and y = 6 (the upper bound)
        let points: Vec<Point> = (0..12)
            .map(|i| Point::with_id(i, [2, 6, 2, 4, 6, 2][i as usize % 6], i as u64))
            .collect();
        let found = query_all(&points, Point::new(0, 2), Point::new(11, 6));
        assert_eq!(found.len(), 12, "every point sits inside the y range");

        let found = query_all(&points, Point::new(0, 2), Point::new(11, 2));
        assert_eq!(found, vec![(0, 2), (2, 2), (5, 2), (6, 2), (8, 2), (11, 2)]);

        let found = query_all(&points, Point::new(3, 6), Point::new(10, 6));
        assert_eq!(found, vec![(4, 6), (7, 6), (10, 6)]);
    }

    #[test]
    fn test_square_query_near_max_saturates() {
        let low = Point::new(i64::MAX - 5, i64::MAX - 5);
        let query = Query::square(low, 100);
        assert_eq!(query.high, Point::new(i64::MAX, i64::MAX));

        let points = [Point::new(0, 0), Point::new(i64::MAX, i64::MAX)];
        let tree = RangeTree::build_sorted(&points).expect("non-empty input");
        let found = tree.query_rect(&query).expect("valid rectangle");
        assert_eq!(found, vec![Point::new(i64::MAX, i64::MAX)]);
    }

    #[test]
    fn test_ids_are_preserved() {
        let points = [
            Point::with_id(1, 1, 100),
            Point::with_id(2, 2, 200),
            Point::with_id(3, 3, 300),
        ];
        let tree = CascadedRangeTree::build(&points).expect("non-empty input");
        let query = Query::from_bounds(2, 0, 3, 10);
        let mut ids: Vec<u64> = tree
            .query_rect(&query)
            .expect("valid rectangle")
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![200, 300]);
    }

    #[test]
    fn test_reused_buffer_across_queries() {
        let points: Vec<Point> = (0..100).map(|i| Point::new(i, 99 - i)).collect();
        let tree = RangeTree::build(&points, BuildStrategy::default()).expect("non-empty input");

        let mut results = Vec::new();
        tree.query_into(&Point::new(0, 0), &Point::new(9, 99), &mut results)
            .expect("valid rectangle");
        assert_eq!(results.len(), 10);

        tree.query_into(&Point::new(50, 0), &Point::new(99, 9), &mut results)
            .expect("valid rectangle");
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|p| p.x >= 90), "stale results left in buffer");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(RangeTree::build_sorted(&[]).err(), Some(RangeTreeError::EmptyInput));

        let tree = CascadedRangeTree::build(&[Point::new(0, 0)]).expect("non-empty input");
        let err = tree
            .query(&Point::new(1, 1), &Point::new(0, 2))
            .expect_err("inverted x must be rejected");
        assert!(matches!(err, RangeTreeError::InvalidRectangle { .. }));
    }
}
