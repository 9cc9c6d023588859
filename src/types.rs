//! Scalar types that can be used as co-ordinates of the points stored in a [`KdTree`](crate::KdTree).
use num_traits::float::FloatCore;
use std::fmt::{Debug, Display};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the co-ordinate type, `A`,
/// on [`KdTree`](crate::KdTree). This will be [`f64`] or [`f32`].
pub trait Axis:
    FloatCore + Default + Debug + Display + Copy + Sync + Send + std::ops::AddAssign
{
    /// returns absolute diff between two values of a type implementing this trait
    fn dist(self, other: Self) -> Self;

    /// returns the squared diff between two values of a type implementing this trait
    fn dist_squared(self, other: Self) -> Self;
}

impl<T: FloatCore + Default + Debug + Display + Copy + Sync + Send + std::ops::AddAssign> Axis
    for T
{
    #[inline]
    fn dist(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn dist_squared(self, other: Self) -> Self {
        (self - other) * (self - other)
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn dist_is_symmetric() {
        assert_eq!(0.25f64.dist(0.75), 0.5);
        assert_eq!(0.75f64.dist(0.25), 0.5);
        assert_eq!(3f32.dist_squared(1f32), 4f32);
        assert_eq!(1f32.dist_squared(3f32), 4f32);
    }
}
