//! Contains a selection of distance metrics that can be chosen from to measure the distance
//! between two points stored inside the tree.

use crate::distance_metric::DistanceMetric;
use crate::point::Point;
use crate::types::Axis;

/// Returns the Manhattan / "taxi cab" distance between two points.
///
/// # Examples
///
/// ```rust
/// use kdtree2d::{DistanceMetric, Manhattan, Point};
///
/// let origin = Point::new(0f32, 0f32).unwrap();
///
/// assert_eq!(0f32, Manhattan::dist(&origin, &origin));
/// assert_eq!(1f32, Manhattan::dist(&origin, &Point::new(1f32, 0f32).unwrap()));
/// assert_eq!(2f32, Manhattan::dist(&origin, &Point::new(1f32, 1f32).unwrap()));
/// ```
#[derive(Debug)]
pub struct Manhattan {}

impl<A: Axis> DistanceMetric<A> for Manhattan {
    #[inline]
    fn dist(a: &Point<A>, b: &Point<A>) -> A {
        a.x().dist(b.x()) + a.y().dist(b.y())
    }

    #[inline]
    fn dist1(a: A, b: A) -> A {
        a.dist(b)
    }
}

/// Returns the squared euclidean distance between two points.
///
/// Faster than Euclidean distance due to not needing a square root, but still
/// preserves the same distance ordering as with Euclidean distance.
///
/// # Examples
///
/// ```rust
/// use kdtree2d::{DistanceMetric, Point, SquaredEuclidean};
///
/// let origin = Point::new(0f32, 0f32).unwrap();
///
/// assert_eq!(0f32, SquaredEuclidean::dist(&origin, &origin));
/// assert_eq!(1f32, SquaredEuclidean::dist(&origin, &Point::new(1f32, 0f32).unwrap()));
/// assert_eq!(2f32, SquaredEuclidean::dist(&origin, &Point::new(1f32, 1f32).unwrap()));
/// ```
#[derive(Debug)]
pub struct SquaredEuclidean {}

impl<A: Axis> DistanceMetric<A> for SquaredEuclidean {
    #[inline]
    fn dist(a: &Point<A>, b: &Point<A>) -> A {
        a.distance_squared_to(b)
    }

    #[inline]
    fn dist1(a: A, b: A) -> A {
        a.dist_squared(b)
    }
}
