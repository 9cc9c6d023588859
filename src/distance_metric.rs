//! The trait that needs to be implemented by any distance metrics

use crate::point::Point;

/// Trait that needs to be implemented by any potential distance
/// metric to be used within nearest neighbour queries
pub trait DistanceMetric<A> {
    /// returns the distance between two points, as measured
    /// by a particular distance metric
    fn dist(a: &Point<A>, b: &Point<A>) -> A;

    /// returns the distance between two points along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// (used by the nearest neighbour query to decide whether the far side
    /// of a splitting line can hold anything closer than the current best,
    /// so it must never exceed `dist` for points that differ only on that axis)
    fn dist1(a: A, b: A) -> A;
}
