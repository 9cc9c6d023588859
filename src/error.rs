//! Errors returned at the public API boundary.
use thiserror::Error;

/// Errors from constructing points and rectangles or inserting into a tree.
///
/// Invalid arguments are rejected here, before they can reach any of the
/// tree traversals.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdTreeError {
    /// A co-ordinate was NaN or infinite.
    #[error("invalid argument: co-ordinates must be finite")]
    NonFiniteCoordinate,

    /// A rectangle had a minimum greater than its maximum on some axis.
    #[error("invalid argument: rectangle minimum exceeds its maximum")]
    InvertedRect,

    /// A point was inserted that lies outside the tree's domain.
    #[error("invalid argument: point lies outside the tree domain")]
    OutOfDomain,
}

/// Result type for fallible kdtree2d operations.
pub type Result<T> = std::result::Result<T, KdTreeError>;
