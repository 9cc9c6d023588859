use crate::error::{KdTreeError, Result};
use crate::kdtree::{KdTree, Node};
use crate::point::Point;
use crate::split::SplitAxis;
use crate::types::Axis;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis> KdTree<A> {
    /// Adds a point to the tree, if an equal point is not already stored.
    ///
    /// Returns `Ok(true)` if the point was added and `Ok(false)` if the tree
    /// already held it, in which case the tree is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::OutOfDomain`] if `point` lies outside the tree's domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// let point = Point::new(0.7, 0.1).unwrap();
    ///
    /// assert_eq!(tree.insert(point), Ok(true));
    /// assert_eq!(tree.insert(point), Ok(false));
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
    pub fn insert(&mut self, point: Point<A>) -> Result<bool> {
        if !self.domain.contains(&point) {
            return Err(KdTreeError::OutOfDomain);
        }

        let Some(mut curr_idx) = self.root() else {
            self.nodes
                .push(Node::new(point, self.domain, SplitAxis::Vertical));

            #[cfg(feature = "tracing")]
            event!(Level::TRACE, %point, "created root");

            return Ok(true);
        };

        let mut depth = 0usize;
        loop {
            let node = &self.nodes[curr_idx];
            if node.point == point {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, %point, depth, "duplicate point ignored");

                return Ok(false);
            }

            let is_left = node.goes_left(&point);
            let next = if is_left { node.left } else { node.right };
            depth += 1;

            match next {
                Some(child_idx) => curr_idx = child_idx,
                None => {
                    let (lower, upper) = node.rect.bisect(node.axis, node.split_val());
                    let rect = if is_left { lower } else { upper };
                    let child = Node::new(point, rect, node.axis.flip());
                    debug_assert!(child.rect.contains(&child.point));

                    let child_idx = self.nodes.len();
                    self.nodes.push(child);

                    let parent = &mut self.nodes[curr_idx];
                    if is_left {
                        parent.left = Some(child_idx);
                    } else {
                        parent.right = Some(child_idx);
                    }

                    #[cfg(feature = "tracing")]
                    event!(Level::TRACE, %point, %rect, depth, "created node");

                    return Ok(true);
                }
            }
        }
    }
}
