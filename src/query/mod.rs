//! Read-only queries over a [`KdTree`](crate::KdTree).

pub mod contains;
pub mod nearest_one;
pub mod range;
