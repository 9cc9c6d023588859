//! The interface shared by [`KdTree`] and [`BruteForcePointSet`], so either can
//! be driven by the same code.
use crate::error::Result;
use crate::kdtree::KdTree;
use crate::point::Point;
use crate::point_set::BruteForcePointSet;
use crate::rect::Rect;
use crate::types::Axis;

/// A set of unique points supporting membership, range and nearest neighbour queries.
pub trait PointIndex<A: Axis> {
    /// Adds `point` if no equal point is present, returning whether it was added.
    ///
    /// # Errors
    ///
    /// Implementations over a bounded domain reject points outside it.
    fn insert(&mut self, point: Point<A>) -> Result<bool>;

    /// Returns true if a point equal to `query` is present
    fn contains(&self, query: &Point<A>) -> bool;

    /// All points inside `rect` or on its boundary, in no particular order
    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>>;

    /// A point at minimum Euclidean distance from `query`, `None` if empty
    fn nearest(&self, query: &Point<A>) -> Option<Point<A>>;

    /// Number of distinct points
    fn size(&self) -> usize;

    /// Returns true if there are no points
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<A: Axis> PointIndex<A> for KdTree<A> {
    fn insert(&mut self, point: Point<A>) -> Result<bool> {
        KdTree::insert(self, point)
    }

    fn contains(&self, query: &Point<A>) -> bool {
        KdTree::contains(self, query)
    }

    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        KdTree::range(self, rect)
    }

    fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        KdTree::nearest(self, query)
    }

    fn size(&self) -> usize {
        KdTree::size(self)
    }
}

impl<A: Axis> PointIndex<A> for BruteForcePointSet<A> {
    fn insert(&mut self, point: Point<A>) -> Result<bool> {
        Ok(BruteForcePointSet::insert(self, point))
    }

    fn contains(&self, query: &Point<A>) -> bool {
        BruteForcePointSet::contains(self, query)
    }

    fn range(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        BruteForcePointSet::range(self, rect)
    }

    fn nearest(&self, query: &Point<A>) -> Option<Point<A>> {
        BruteForcePointSet::nearest(self, query)
    }

    fn size(&self) -> usize {
        BruteForcePointSet::size(self)
    }
}
