//! Immutable 2d points.
use std::cmp::Ordering;
use std::fmt;

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::error::{KdTreeError, Result};
use crate::split::SplitAxis;
use crate::types::Axis;

/// A point in the plane with finite co-ordinates.
///
/// Equality is exact co-ordinate equality. Points are ordered by
/// y co-ordinate, then by x co-ordinate, which lets them key ordered
/// collections such as [`BTreeSet`](std::collections::BTreeSet).
///
/// # Examples
///
/// ```rust
/// use kdtree2d::Point;
///
/// let a = Point::new(0.0f64, 0.0).unwrap();
/// let b = Point::new(3.0f64, 4.0).unwrap();
///
/// assert_eq!(a.distance_squared_to(&b), 25.0);
/// assert_eq!(a.distance_to(&b), 5.0);
/// assert!(Point::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<A> {
    x: A,
    y: A,
}

impl<A: Axis> Point<A> {
    /// Creates a point, rejecting NaN or infinite co-ordinates.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::NonFiniteCoordinate`] if either co-ordinate is not finite.
    #[inline]
    pub fn new(x: A, y: A) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(KdTreeError::NonFiniteCoordinate);
        }
        Ok(Self { x, y })
    }

    /// The x co-ordinate
    #[inline]
    pub fn x(&self) -> A {
        self.x
    }

    /// The y co-ordinate
    #[inline]
    pub fn y(&self) -> A {
        self.y
    }

    /// The co-ordinate that a node split on `axis` compares.
    #[inline]
    pub fn coord(&self, axis: SplitAxis) -> A {
        match axis {
            SplitAxis::Vertical => self.x,
            SplitAxis::Horizontal => self.y,
        }
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> A {
        self.x.dist_squared(other.x) + self.y.dist_squared(other.y)
    }
}

impl<A: Axis + Float> Point<A> {
    /// Euclidean distance between two points.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> A {
        Float::sqrt(self.distance_squared_to(other))
    }
}

impl<A: Axis> TryFrom<[A; 2]> for Point<A> {
    type Error = KdTreeError;

    fn try_from(value: [A; 2]) -> Result<Self> {
        Point::new(value[0], value[1])
    }
}

impl<A: Axis> TryFrom<(A, A)> for Point<A> {
    type Error = KdTreeError;

    fn try_from(value: (A, A)) -> Result<Self> {
        Point::new(value.0, value.1)
    }
}

impl<A: Axis> From<Point<A>> for [A; 2] {
    fn from(point: Point<A>) -> Self {
        [point.x, point.y]
    }
}

// Co-ordinates are finite by construction, so the total order below agrees
// with the derived `PartialEq`.
impl<A: Axis> Eq for Point<A> {}

impl<A: Axis> Ord for Point<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.y)
            .cmp(&OrderedFloat(other.y))
            .then_with(|| OrderedFloat(self.x).cmp(&OrderedFloat(other.x)))
    }
}

impl<A: Axis> PartialOrd for Point<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Axis> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
