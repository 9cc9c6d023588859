use crate::distance::SquaredEuclidean;
use crate::distance_metric::DistanceMetric;
use crate::kdtree::KdTree;
use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::types::Axis;

#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

impl<A: Axis> KdTree<A> {
    /// Finds the stored point closest to `query` by Euclidean distance.
    ///
    /// Returns `None` only when the tree is empty. When several points are
    /// exactly equally close, which of them is returned is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// assert_eq!(tree.nearest(&Point::new(0.5, 0.5).unwrap()), None);
    ///
    /// tree.insert(Point::new(0.5, 0.5).unwrap()).unwrap();
    /// tree.insert(Point::new(0.7, 0.6).unwrap()).unwrap();
    ///
    /// assert_eq!(
    ///     tree.nearest(&Point::new(0.73, 0.5).unwrap()),
    ///     Some(Point::new(0.7, 0.6).unwrap())
    /// );
    /// ```
    #[inline]
    pub fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        self.nearest_one::<SquaredEuclidean>(query)
            .map(|neighbour| neighbour.point)
    }

    /// Queries the tree to find the nearest point to `query`, using the specified
    /// distance metric.
    ///
    /// The returned distance is measured by `D`, so for [`SquaredEuclidean`] it
    /// is the squared distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Manhattan, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// tree.insert(Point::new(0.25, 0.25).unwrap()).unwrap();
    /// tree.insert(Point::new(0.5, 0.75).unwrap()).unwrap();
    ///
    /// let nearest = tree.nearest_one::<Manhattan>(&Point::new(0.5, 0.5).unwrap()).unwrap();
    ///
    /// assert_eq!(nearest.distance, 0.25);
    /// assert_eq!(nearest.point, Point::new(0.5, 0.75).unwrap());
    /// ```
    pub fn nearest_one<D>(&self, query: &Point<A>) -> Option<NearestNeighbour<A>>
    where
        D: DistanceMetric<A>,
    {
        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "nearest_one", %query);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (best_neighbour, visited) = self.nearest_one_with_visits::<D>(query);

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            visited,
            found = best_neighbour.is_some(),
            "nearest query complete"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = visited;

        best_neighbour
    }

    /// Runs a nearest neighbour query, also returning how many nodes were examined.
    pub(crate) fn nearest_one_with_visits<D>(
        &self,
        query: &Point<A>,
    ) -> (Option<NearestNeighbour<A>>, usize)
    where
        D: DistanceMetric<A>,
    {
        let Some(root_idx) = self.root() else {
            return (None, 0);
        };

        let root = &self.nodes[root_idx];
        let mut best_neighbour = NearestNeighbour {
            distance: D::dist(query, &root.point),
            point: root.point,
        };
        let mut visited = 0;

        // each entry carries a lower bound on the distance to anything in its subtree.
        // Far sides are pushed beneath the near side, so their bound is tested against
        // the best found after the near side has been searched.
        let mut stack = vec![(root_idx, A::zero())];

        while let Some((curr_idx, min_dist)) = stack.pop() {
            if min_dist >= best_neighbour.distance {
                continue;
            }

            let node = &self.nodes[curr_idx];
            visited += 1;

            let distance = D::dist(query, &node.point);
            if distance < best_neighbour.distance {
                best_neighbour.distance = distance;
                best_neighbour.point = node.point;
            }

            let [closer_idx, further_idx] = node.children_towards(query);

            if let Some(further_idx) = further_idx {
                let split_dist = D::dist1(query.coord(node.axis), node.split_val());
                stack.push((further_idx, split_dist));
            }
            if let Some(closer_idx) = closer_idx {
                stack.push((closer_idx, A::zero()));
            }
        }

        (Some(best_neighbour), visited)
    }
}
