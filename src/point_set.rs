//! Brute force point set, used as a reference for checking [`KdTree`](crate::KdTree) results.
use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::distance::SquaredEuclidean;
use crate::distance_metric::DistanceMetric;
use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::rect::Rect;
use crate::types::Axis;

/// A set of unique points, ordered by y then x co-ordinate.
///
/// Answers the same queries as [`KdTree`](crate::KdTree) by scanning every
/// point, with no pruning and no domain restriction.
///
/// # Examples
///
/// ```rust
/// use kdtree2d::{BruteForcePointSet, Point, Rect};
///
/// let mut set: BruteForcePointSet<f64> = BruteForcePointSet::new();
/// set.insert(Point::new(0.5, 0.5).unwrap());
/// set.insert(Point::new(0.25, 0.3).unwrap());
///
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.range(&Rect::new(0.0, 0.0, 0.3, 0.3).unwrap()).len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BruteForcePointSet<A: Axis = f64> {
    points: BTreeSet<Point<A>>,
}

impl<A: Axis> BruteForcePointSet<A> {
    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Number of distinct points in the set
    #[inline]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds `point`, returning false if an equal point was already present.
    pub fn insert(&mut self, point: Point<A>) -> bool {
        self.points.insert(point)
    }

    /// Returns true if the set holds a point equal to `query`
    pub fn contains(&self, query: &Point<A>) -> bool {
        self.points.contains(query)
    }

    /// All points inside `rect` or on its boundary, in set order.
    pub fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        self.points
            .iter()
            .filter(|point| rect.contains(point))
            .copied()
            .collect()
    }

    /// The point closest to `query` by Euclidean distance, or `None` if the set is empty.
    pub fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        self.nearest_one::<SquaredEuclidean>(query)
            .map(|neighbour| neighbour.point)
    }

    /// The point closest to `query` as measured by `D`. The first point in set
    /// order wins among exact ties.
    pub fn nearest_one<D>(&self, query: &Point<A>) -> Option<NearestNeighbour<A>>
    where
        D: DistanceMetric<A>,
    {
        self.points
            .iter()
            .map(|point| NearestNeighbour {
                distance: D::dist(query, point),
                point: *point,
            })
            .min()
    }

    /// Iterates over the points in y-then-x order.
    pub fn iter(&self) -> btree_set::Iter<'_, Point<A>> {
        self.points.iter()
    }
}

impl<A: Axis> FromIterator<Point<A>> for BruteForcePointSet<A> {
    fn from_iter<I: IntoIterator<Item = Point<A>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<A: Axis> Extend<Point<A>> for BruteForcePointSet<A> {
    fn extend<I: IntoIterator<Item = Point<A>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a, A: Axis> IntoIterator for &'a BruteForcePointSet<A> {
    type Item = &'a Point<A>;
    type IntoIter = btree_set::Iter<'a, Point<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::BruteForcePointSet;
    use crate::distance::Manhattan;
    use crate::point::Point;
    use crate::rect::Rect;

    type AX = f64;

    fn p(x: AX, y: AX) -> Point<AX> {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn holds_unique_points() {
        let mut set: BruteForcePointSet<AX> = BruteForcePointSet::new();

        assert!(set.insert(p(0.7, 0.1)));
        assert!(!set.insert(p(0.7, 0.1)));
        assert!(!set.insert(p(0.7, 0.1)));

        assert_eq!(set.size(), 1);
        assert!(set.contains(&p(0.7, 0.1)));
        assert!(!set.contains(&p(0.1, 0.7)));
    }

    #[test]
    fn iterates_in_y_then_x_order() {
        let set: BruteForcePointSet<AX> = [p(0.5, 0.5), p(0.9, 0.1), p(0.1, 0.5)]
            .into_iter()
            .collect();

        let ordered: Vec<_> = set.iter().copied().collect();

        assert_eq!(ordered, vec![p(0.9, 0.1), p(0.1, 0.5), p(0.5, 0.5)]);
    }

    #[test]
    fn range_is_boundary_inclusive() {
        let mut set: BruteForcePointSet<AX> = BruteForcePointSet::new();
        set.extend([p(0.5, 0.5), p(0.25, 0.3), p(0.7, 0.6), p(0.2, 0.8)]);

        let found = set.range(&Rect::new(0.0, 0.0, 0.6, 0.6).unwrap());

        assert_eq!(found, vec![p(0.25, 0.3), p(0.5, 0.5)]);
        assert_eq!(set.range(&Rect::new(0.7, 0.6, 0.7, 0.6).unwrap()), vec![p(0.7, 0.6)]);
    }

    #[test]
    fn nearest_scans_every_point() {
        let mut set: BruteForcePointSet<AX> = BruteForcePointSet::new();
        assert_eq!(set.nearest(&p(0.5, 0.5)), None);

        set.extend([p(0.5, 0.5), p(0.25, 0.3), p(0.7, 0.6), p(0.2, 0.8)]);

        assert_eq!(set.nearest(&p(0.73, 0.5)), Some(p(0.7, 0.6)));
        assert_eq!(
            set.nearest_one::<Manhattan>(&p(0.25, 0.25)).map(|n| n.point),
            Some(p(0.25, 0.3))
        );
    }

    #[test]
    fn nearest_keeps_the_first_of_exact_ties() {
        let set: BruteForcePointSet<AX> = [p(0.25, 0.5), p(0.75, 0.5)].into_iter().collect();

        assert_eq!(set.nearest(&p(0.5, 0.5)), Some(p(0.25, 0.5)));
    }
}
