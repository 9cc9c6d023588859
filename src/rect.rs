//! Immutable axis-aligned rectangles.
use std::fmt;

use num_traits::Float;

use crate::error::{KdTreeError, Result};
use crate::point::Point;
use crate::split::SplitAxis;
use crate::types::Axis;

/// An axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// All containment and intersection tests include the boundary.
///
/// # Examples
///
/// ```rust
/// use kdtree2d::{Point, Rect};
///
/// let rect = Rect::new(0.0f64, 0.0, 0.5, 0.5).unwrap();
///
/// assert!(rect.contains(&Point::new(0.5, 0.5).unwrap()));
/// assert_eq!(rect.distance_squared_to(&Point::new(1.5, 0.5).unwrap()), 1.0);
/// assert!(Rect::new(1.0f64, 0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<A> {
    xmin: A,
    ymin: A,
    xmax: A,
    ymax: A,
}

impl<A: Axis> Rect<A> {
    /// Creates a rectangle from its lower-left and upper-right corners.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::NonFiniteCoordinate`] if any bound is NaN or infinite,
    /// or [`KdTreeError::InvertedRect`] if `xmin > xmax` or `ymin > ymax`.
    pub fn new(xmin: A, ymin: A, xmax: A, ymax: A) -> Result<Self> {
        if [xmin, ymin, xmax, ymax].iter().any(|v| !v.is_finite()) {
            return Err(KdTreeError::NonFiniteCoordinate);
        }
        if xmin > xmax || ymin > ymax {
            return Err(KdTreeError::InvertedRect);
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// The unit square `[0, 1] x [0, 1]`.
    #[inline]
    pub fn unit() -> Self {
        Self {
            xmin: A::zero(),
            ymin: A::zero(),
            xmax: A::one(),
            ymax: A::one(),
        }
    }

    /// Minimum x co-ordinate
    #[inline]
    pub fn xmin(&self) -> A {
        self.xmin
    }

    /// Minimum y co-ordinate
    #[inline]
    pub fn ymin(&self) -> A {
        self.ymin
    }

    /// Maximum x co-ordinate
    #[inline]
    pub fn xmax(&self) -> A {
        self.xmax
    }

    /// Maximum y co-ordinate
    #[inline]
    pub fn ymax(&self) -> A {
        self.ymax
    }

    /// Lower bound along the co-ordinate compared by `axis`.
    #[inline]
    pub fn min_along(&self, axis: SplitAxis) -> A {
        match axis {
            SplitAxis::Vertical => self.xmin,
            SplitAxis::Horizontal => self.ymin,
        }
    }

    /// Upper bound along the co-ordinate compared by `axis`.
    #[inline]
    pub fn max_along(&self, axis: SplitAxis) -> A {
        match axis {
            SplitAxis::Vertical => self.xmax,
            SplitAxis::Horizontal => self.ymax,
        }
    }

    /// Extent along x
    #[inline]
    pub fn width(&self) -> A {
        self.xmax - self.xmin
    }

    /// Extent along y
    #[inline]
    pub fn height(&self) -> A {
        self.ymax - self.ymin
    }

    /// Returns true if `point` is inside the rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, point: &Point<A>) -> bool {
        point.x() >= self.xmin
            && point.x() <= self.xmax
            && point.y() >= self.ymin
            && point.y() <= self.ymax
    }

    /// Returns true if the two rectangles share at least one point,
    /// including when they only touch along an edge or at a corner.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared Euclidean distance from `point` to the closest point of the
    /// rectangle. Zero if `point` is inside or on the boundary.
    pub fn distance_squared_to(&self, point: &Point<A>) -> A {
        let dx = if point.x() < self.xmin {
            self.xmin - point.x()
        } else if point.x() > self.xmax {
            point.x() - self.xmax
        } else {
            A::zero()
        };
        let dy = if point.y() < self.ymin {
            self.ymin - point.y()
        } else if point.y() > self.ymax {
            point.y() - self.ymax
        } else {
            A::zero()
        };

        dx * dx + dy * dy
    }

    /// Cuts the rectangle with the line through `at` perpendicular to the
    /// co-ordinate `axis` compares, returning `(lower, upper)`.
    ///
    /// The two halves share the splitting line. `at` must lie within the
    /// rectangle's extent along `axis`.
    pub(crate) fn bisect(&self, axis: SplitAxis, at: A) -> (Self, Self) {
        debug_assert!(
            at >= self.min_along(axis) && at <= self.max_along(axis),
            "split line {at} outside {self}"
        );
        match axis {
            SplitAxis::Vertical => (
                Self {
                    xmax: at,
                    ..*self
                },
                Self {
                    xmin: at,
                    ..*self
                },
            ),
            SplitAxis::Horizontal => (
                Self {
                    ymax: at,
                    ..*self
                },
                Self {
                    ymin: at,
                    ..*self
                },
            ),
        }
    }
}

impl<A: Axis + Float> Rect<A> {
    /// Euclidean distance from `point` to the closest point of the rectangle.
    #[inline]
    pub fn distance_to(&self, point: &Point<A>) -> A {
        Float::sqrt(self.distance_squared_to(point))
    }
}

impl<A: Axis> Default for Rect<A> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<A: Axis> fmt::Display for Rect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
