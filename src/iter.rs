//! Read-only traversal of a [`KdTree`](crate::KdTree)'s subdivision, for renderers and
//! other consumers that need to see every node.
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::rect::Rect;
use crate::split::SplitAxis;
use crate::types::Axis;

/// Snapshot of one node: the stored point, the rectangle it is responsible for,
/// the axis its splitting line runs along and how deep it sits below the root.
///
/// The splitting line of a node is `x = point.x()` clipped to `rect` for
/// [`SplitAxis::Vertical`], and `y = point.y()` clipped to `rect` for
/// [`SplitAxis::Horizontal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView<A> {
    /// the stored point
    pub point: Point<A>,
    /// the region of the plane owned by this node and its descendants
    pub rect: Rect<A>,
    /// the axis this node compares on
    pub axis: SplitAxis,
    /// zero for the root
    pub depth: usize,
}

/// Pre-order iterator over the nodes of a [`KdTree`]. Created by [`KdTree::nodes`].
#[derive(Debug)]
pub struct NodeIter<'a, A> {
    tree: &'a KdTree<A>,
    stack: Vec<(usize, usize)>,
}

impl<'a, A: Axis> NodeIter<'a, A> {
    pub(crate) fn new(tree: &'a KdTree<A>) -> Self {
        let stack = tree.root().map(|idx| (idx, 0)).into_iter().collect();
        Self { tree, stack }
    }
}

impl<A: Axis> Iterator for NodeIter<'_, A> {
    type Item = NodeView<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[idx];

        // right pushed first so the left subtree is visited first
        self.stack
            .extend([node.right, node.left].into_iter().flatten().map(|child| (child, depth + 1)));

        Some(NodeView {
            point: node.point,
            rect: node.rect,
            axis: node.axis,
            depth,
        })
    }
}

impl<A: Axis> KdTree<A> {
    /// Visits every node exactly once, parents before children and left
    /// subtrees before right ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point, SplitAxis};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// tree.insert(Point::new(0.5, 0.5).unwrap()).unwrap();
    /// tree.insert(Point::new(0.25, 0.3).unwrap()).unwrap();
    ///
    /// let axes: Vec<_> = tree.nodes().map(|node| node.axis).collect();
    ///
    /// assert_eq!(axes, vec![SplitAxis::Vertical, SplitAxis::Horizontal]);
    /// ```
    pub fn nodes(&self) -> NodeIter<'_, A> {
        NodeIter::new(self)
    }

    /// Iterates over the stored points in the same order as [`nodes`](KdTree::nodes).
    pub fn points(&self) -> impl Iterator<Item = Point<A>> + '_ {
        self.nodes().map(|node| node.point)
    }
}

#[cfg(test)]
mod tests {
    use crate::kdtree::KdTree;
    use crate::point::Point;
    use crate::rect::Rect;
    use crate::split::SplitAxis;
    use crate::test_utils::rand_points;
    use std::collections::BTreeSet;

    type AX = f64;

    fn p(x: AX, y: AX) -> Point<AX> {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn empty_tree_has_no_nodes() {
        let tree: KdTree<AX> = KdTree::new();

        assert_eq!(tree.nodes().count(), 0);
        assert_eq!(tree.points().count(), 0);
    }

    #[test]
    fn visits_in_pre_order() {
        let mut tree: KdTree<AX> = KdTree::new();
        for point in [p(0.5, 0.5), p(0.7, 0.6), p(0.25, 0.3), p(0.2, 0.8), p(0.2, 0.1)] {
            tree.insert(point).unwrap();
        }

        let visited: Vec<_> = tree.nodes().map(|n| (n.point, n.depth)).collect();

        assert_eq!(
            visited,
            vec![
                (p(0.5, 0.5), 0),
                (p(0.25, 0.3), 1),
                (p(0.2, 0.1), 2),
                (p(0.2, 0.8), 2),
                (p(0.7, 0.6), 1),
            ]
        );
    }

    #[test]
    fn reports_rects_and_axes() {
        let mut tree: KdTree<AX> = KdTree::new();
        for point in [p(0.5, 0.5), p(0.7, 0.6)] {
            tree.insert(point).unwrap();
        }

        let views: Vec<_> = tree.nodes().collect();

        assert_eq!(views[0].rect, Rect::unit());
        assert_eq!(views[0].axis, SplitAxis::Vertical);
        assert_eq!(views[1].rect, Rect::new(0.5, 0.0, 1.0, 1.0).unwrap());
        assert_eq!(views[1].axis, SplitAxis::Horizontal);
    }

    #[test]
    fn visits_every_node_exactly_once() {
        let points = rand_points::<AX>(3_000, 53);
        let tree = KdTree::try_from(&points[..]).unwrap();

        let visited: Vec<_> = tree.points().collect();
        let unique: BTreeSet<_> = visited.iter().copied().collect();
        let expected: BTreeSet<_> = points.iter().copied().collect();

        assert_eq!(visited.len(), tree.size());
        assert_eq!(unique, expected);
    }

    #[test]
    fn depth_matches_axis_parity() {
        let points = rand_points::<AX>(500, 59);
        let tree = KdTree::try_from(&points[..]).unwrap();

        for node in tree.nodes() {
            let expected = if node.depth % 2 == 0 {
                SplitAxis::Vertical
            } else {
                SplitAxis::Horizontal
            };
            assert_eq!(node.axis, expected);
        }
    }
}
