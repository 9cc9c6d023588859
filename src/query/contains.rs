use crate::kdtree::KdTree;
use crate::point::Point;
use crate::types::Axis;

impl<A: Axis> KdTree<A> {
    /// Returns true if the tree holds a point equal to `query`.
    ///
    /// Follows the same path that [`insert`](KdTree::insert) would take for
    /// `query`, so it visits at most one node per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// tree.insert(Point::new(0.5, 0.5).unwrap()).unwrap();
    ///
    /// assert!(tree.contains(&Point::new(0.5, 0.5).unwrap()));
    /// assert!(!tree.contains(&Point::new(0.5, 0.1).unwrap()));
    /// ```
    pub fn contains(&self, query: &Point<A>) -> bool {
        let mut curr_idx = self.root();

        while let Some(idx) = curr_idx {
            let node = &self.nodes[idx];
            if node.point == *query {
                return true;
            }

            curr_idx = if node.goes_left(query) {
                node.left
            } else {
                node.right
            };
        }

        false
    }
}
