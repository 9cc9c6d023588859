use crate::kdtree::KdTree;
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Axis;

#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

impl<A: Axis> KdTree<A> {
    /// Finds all points inside `rect`, including those on its edges and corners.
    ///
    /// Results are returned in traversal order, which is deterministic for a
    /// given tree but otherwise unspecified. Each stored point appears at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// for (x, y) in [(0.5, 0.5), (0.25, 0.3), (0.7, 0.6), (0.2, 0.8)] {
    ///     tree.insert(Point::new(x, y).unwrap()).unwrap();
    /// }
    ///
    /// let mut found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6).unwrap());
    /// found.sort();
    ///
    /// assert_eq!(found, vec![Point::new(0.25, 0.3).unwrap(), Point::new(0.5, 0.5).unwrap()]);
    /// ```
    pub fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "range", %rect);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (matching_points, visited) = self.range_with_visits(rect);

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            visited,
            found = matching_points.len(),
            "range query complete"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = visited;

        matching_points
    }

    /// Runs a range query, also returning how many nodes were examined.
    pub(crate) fn range_with_visits(&self, query: &Rect<A>) -> (Vec<Point<A>>, usize) {
        let mut matching_points = Vec::new();
        let mut visited = 0;

        // depth-first with an explicit stack: an unbalanced tree can be as deep as it is large
        let mut stack: Vec<usize> = self.root().into_iter().collect();

        while let Some(curr_idx) = stack.pop() {
            let node = &self.nodes[curr_idx];

            // nothing in this subtree can lie inside the query
            if !node.rect.intersects(query) {
                continue;
            }
            visited += 1;

            debug_assert!(
                node.rect.contains(&node.point),
                "node rect {} does not contain its point {}",
                node.rect,
                node.point
            );

            if query.contains(&node.point) {
                matching_points.push(node.point);
            }

            // left holds co-ordinates strictly below the split value, right the rest
            let split_val = node.split_val();
            let reaches_left = query.min_along(node.axis) < split_val;
            let reaches_right = query.max_along(node.axis) >= split_val;

            // right pushed first so the left subtree is searched first
            for (child_idx, reaches) in [(node.right, reaches_right), (node.left, reaches_left)] {
                if let (Some(child_idx), true) = (child_idx, reaches) {
                    stack.push(child_idx);
                }
            }
        }

        (matching_points, visited)
    }
}

#[cfg(test)]
mod tests {
    use crate::kdtree::KdTree;
    use crate::point::Point;
    use crate::point_set::BruteForcePointSet;
    use crate::rect::Rect;
    use crate::test_utils::{init_test_logging, rand_points, rand_rects};
    use rstest::rstest;
    use std::collections::BTreeSet;

    type AX = f64;

    fn p(x: AX, y: AX) -> Point<AX> {
        Point::new(x, y).unwrap()
    }

    fn r(xmin: AX, ymin: AX, xmax: AX, ymax: AX) -> Rect<AX> {
        Rect::new(xmin, ymin, xmax, ymax).unwrap()
    }

    fn scenario_tree() -> KdTree<AX> {
        let mut tree = KdTree::new();
        for point in [p(0.5, 0.5), p(0.25, 0.3), p(0.7, 0.6), p(0.2, 0.8)] {
            tree.insert(point).unwrap();
        }
        tree
    }

    fn sorted(mut points: Vec<Point<AX>>) -> Vec<Point<AX>> {
        points.sort();
        points
    }

    #[test]
    fn empty_tree_finds_nothing() {
        let tree: KdTree<AX> = KdTree::new();

        assert!(tree.range(&Rect::unit()).is_empty());
    }

    #[test]
    fn finds_points_in_the_lower_left() {
        let tree = scenario_tree();

        let found = sorted(tree.range(&r(0.0, 0.0, 0.6, 0.6)));

        assert_eq!(found, vec![p(0.25, 0.3), p(0.5, 0.5)]);
    }

    #[test]
    fn whole_domain_returns_every_point() {
        let tree = scenario_tree();

        assert_eq!(tree.range(&Rect::unit()).len(), 4);
    }

    #[rstest]
    #[case(r(0.5, 0.5, 0.9, 0.9), vec![p(0.5, 0.5), p(0.7, 0.6)])]
    #[case(r(0.0, 0.0, 0.5, 0.5), vec![p(0.25, 0.3), p(0.5, 0.5)])]
    #[case(r(0.5, 0.5, 0.5, 0.5), vec![p(0.5, 0.5)])]
    #[case(r(0.2, 0.8, 0.2, 0.8), vec![p(0.2, 0.8)])]
    #[case(r(0.7, 0.0, 1.0, 0.6), vec![p(0.7, 0.6)])]
    #[case(r(0.26, 0.31, 0.49, 0.49), vec![])]
    fn points_on_edges_and_corners_are_included(
        #[case] query: Rect<AX>,
        #[case] expected: Vec<Point<AX>>,
    ) {
        let tree = scenario_tree();

        assert_eq!(sorted(tree.range(&query)), sorted(expected));
    }

    #[test]
    fn query_rect_outside_the_domain_finds_nothing() {
        let tree = scenario_tree();

        assert!(tree.range(&r(1.5, 1.5, 2.0, 2.0)).is_empty());
    }

    #[test]
    fn query_rect_overhanging_the_domain_still_matches() {
        let tree = scenario_tree();

        let found = sorted(tree.range(&r(0.6, -1.0, 5.0, 5.0)));

        assert_eq!(found, vec![p(0.7, 0.6)]);
    }

    #[test]
    fn points_sharing_a_split_line_are_all_found() {
        let mut tree: KdTree<AX> = KdTree::new();
        let column: Vec<_> = (0..=10).map(|i| p(0.5, i as AX / 10.0)).collect();
        for point in &column {
            tree.insert(*point).unwrap();
        }

        assert_eq!(tree.range(&r(0.5, 0.0, 0.5, 1.0)).len(), column.len());
        assert_eq!(tree.range(&r(0.0, 0.0, 0.5, 0.35)).len(), 4);
        assert!(tree.range(&r(0.0, 0.0, 0.49, 1.0)).is_empty());
    }

    #[test]
    fn a_degenerate_chain_does_not_exhaust_the_stack() {
        const CHAIN_LEN: usize = 20_000;

        let mut tree: KdTree<AX> = KdTree::new();
        for i in 0..CHAIN_LEN {
            let c = i as AX / CHAIN_LEN as AX;
            tree.insert(p(c, c)).unwrap();
        }

        assert_eq!(tree.range(&Rect::unit()).len(), CHAIN_LEN);
        assert_eq!(tree.range(&r(0.5, 0.5, 1.0, 1.0)).len(), CHAIN_LEN / 2);
    }

    #[test]
    fn small_queries_prune_most_of_the_tree() {
        let points = rand_points::<AX>(10_000, 5);
        let tree = KdTree::try_from(&points[..]).unwrap();

        let (found, visited) = tree.range_with_visits(&r(0.4, 0.4, 0.41, 0.41));

        assert!(found.len() < 20);
        assert!(visited < tree.size() / 10, "visited {visited} nodes");
    }

    #[test]
    fn matches_brute_force_for_random_rects() {
        init_test_logging();

        const TREE_SIZE: usize = 5_000;
        const NUM_QUERIES: usize = 200;

        let points = rand_points::<AX>(TREE_SIZE, 17);
        let tree = KdTree::try_from(&points[..]).unwrap();
        let oracle: BruteForcePointSet<AX> = points.iter().copied().collect();

        for query in rand_rects::<AX>(NUM_QUERIES, 19) {
            let result = tree.range(&query);
            let expected: BTreeSet<_> = oracle.range(&query).into_iter().collect();

            assert_eq!(result.len(), expected.len(), "duplicate or missing result");
            assert_eq!(result.into_iter().collect::<BTreeSet<_>>(), expected);
        }
    }
}
