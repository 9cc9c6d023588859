//! The axis a node splits its region on.

/// Which co-ordinate a node compares on.
///
/// The root is always [`SplitAxis::Vertical`] and each child takes the
/// opposite axis of its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Splits on a vertical line `x = node.x`, comparing x co-ordinates.
    #[default]
    Vertical,
    /// Splits on a horizontal line `y = node.y`, comparing y co-ordinates.
    Horizontal,
}

impl SplitAxis {
    /// The axis used by the children of a node split on `self`.
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            SplitAxis::Vertical => SplitAxis::Horizontal,
            SplitAxis::Horizontal => SplitAxis::Vertical,
        }
    }
}
