//! The 2d-tree: a binary search tree over points in the plane whose key
//! alternates between the x and y co-ordinate at each level, with every node
//! owning the rectangle of the plane it is responsible for.

use crate::error::{KdTreeError, Result};
use crate::point::Point;
use crate::rect::Rect;
use crate::split::SplitAxis;
use crate::types::Axis;

pub(crate) const ROOT_IDX: usize = 0;

/// 2d-tree over a bounded domain of the plane.
///
/// Holds at most one copy of each point. Nodes are only ever added, so the
/// tree grows with every distinct insertion and never shrinks.
///
/// # Examples
///
/// ```rust
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree: KdTree<f64> = KdTree::new();
///
/// tree.insert(Point::new(0.5, 0.5).unwrap()).unwrap();
/// tree.insert(Point::new(0.25, 0.3).unwrap()).unwrap();
/// tree.insert(Point::new(0.7, 0.6).unwrap()).unwrap();
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(&Point::new(0.25, 0.3).unwrap()));
///
/// let found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6).unwrap());
/// assert_eq!(found.len(), 2);
///
/// let nearest = tree.nearest(&Point::new(0.73, 0.5).unwrap());
/// assert_eq!(nearest, Some(Point::new(0.7, 0.6).unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A = f64> {
    pub(crate) nodes: Vec<Node<A>>,
    pub(crate) domain: Rect<A>,
}

/// A stored point together with the region of the plane it is responsible for.
///
/// Children are indices into the owning tree's node arena.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A> {
    pub(crate) point: Point<A>,
    pub(crate) rect: Rect<A>,
    pub(crate) axis: SplitAxis,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<A: Axis> Node<A> {
    pub(crate) fn new(point: Point<A>, rect: Rect<A>, axis: SplitAxis) -> Self {
        Self {
            point,
            rect,
            axis,
            left: None,
            right: None,
        }
    }

    /// The co-ordinate of this node's splitting line.
    #[inline]
    pub(crate) fn split_val(&self) -> A {
        self.point.coord(self.axis)
    }

    /// Whether `query` belongs in the left subtree. Ties on the splitting
    /// co-ordinate go right, for insertion and every query alike.
    #[inline]
    pub(crate) fn goes_left(&self, query: &Point<A>) -> bool {
        query.coord(self.axis) < self.split_val()
    }

    /// Child slots ordered `[same side as query, opposite side]`.
    #[inline]
    pub(crate) fn children_towards(&self, query: &Point<A>) -> [Option<usize>; 2] {
        if self.goes_left(query) {
            [self.left, self.right]
        } else {
            [self.right, self.left]
        }
    }
}

impl<A: Axis> Default for KdTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Axis> KdTree<A> {
    /// Creates a new, empty tree over the unit square.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::KdTree;
    ///
    /// let tree: KdTree<f64> = KdTree::new();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_domain(Rect::unit())
    }

    /// Creates a new, empty tree over the unit square, reserving space for
    /// `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            domain: Rect::unit(),
        }
    }

    /// Creates a new, empty tree over `domain`. Only points inside `domain`
    /// (boundary included) can be inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let mut tree = KdTree::with_domain(Rect::new(-10.0f64, -10.0, 10.0, 10.0).unwrap());
    ///
    /// assert_eq!(tree.insert(Point::new(-5.0, 7.5).unwrap()), Ok(true));
    /// assert!(tree.insert(Point::new(11.0, 0.0).unwrap()).is_err());
    /// ```
    #[inline]
    pub fn with_domain(domain: Rect<A>) -> Self {
        Self {
            nodes: Vec::new(),
            domain,
        }
    }

    /// Returns the number of distinct points stored in the tree
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The rectangle owned by the root: every stored point lies inside it.
    #[inline]
    pub fn domain(&self) -> Rect<A> {
        self.domain
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(ROOT_IDX)
        }
    }
}

impl<A: Axis> TryFrom<&[Point<A>]> for KdTree<A> {
    type Error = KdTreeError;

    /// Builds a tree over the unit square by inserting `points` in order.
    fn try_from(points: &[Point<A>]) -> Result<Self> {
        let mut tree = KdTree::with_capacity(points.len());
        for point in points {
            tree.insert(*point)?;
        }

        Ok(tree)
    }
}
