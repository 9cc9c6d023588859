#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # kdtree2d
//!
//! A 2d-tree: a binary search tree over points in a bounded region of the plane,
//! keyed on the x co-ordinate at even depths and the y co-ordinate at odd depths.
//! Every node also records the rectangle of the plane it is responsible for,
//! which lets range and nearest-neighbour queries skip whole subtrees.
//!
//! The tree is deliberately simple: it is not rebalanced, points cannot be
//! removed, and it holds at most one copy of each point.
//! [`BruteForcePointSet`] answers the same queries by scanning every point,
//! and exists to check the tree against.
//!
//! ## Usage
//! ```rust
//! use kdtree2d::{KdTree, Point, Rect};
//!
//! let mut tree: KdTree<f64> = KdTree::new();
//!
//! for (x, y) in [(0.5, 0.5), (0.25, 0.3), (0.7, 0.6), (0.2, 0.8)] {
//!     tree.insert(Point::new(x, y)?)?;
//! }
//! assert_eq!(tree.size(), 4);
//!
//! // inserting the same point again changes nothing
//! assert_eq!(tree.insert(Point::new(0.5, 0.5)?)?, false);
//! assert_eq!(tree.size(), 4);
//!
//! let mut found = tree.range(&Rect::new(0.0, 0.0, 0.6, 0.6)?);
//! found.sort();
//! assert_eq!(found, vec![Point::new(0.25, 0.3)?, Point::new(0.5, 0.5)?]);
//!
//! assert_eq!(tree.nearest(&Point::new(0.73, 0.5)?), Some(Point::new(0.7, 0.6)?));
//! # Ok::<(), kdtree2d::KdTreeError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emits [`tracing`](https://docs.rs/tracing) events on insertion
//!   and spans around queries.
//! - `test_utils`: seeded random point and rectangle generation used by the tests and benches.

mod construction;
pub mod distance;
pub mod distance_metric;
pub mod error;
pub mod iter;
pub mod kdtree;
pub mod nearest_neighbour;
pub mod point;
pub mod point_set;
#[doc(hidden)]
pub mod query;
pub mod rect;
pub mod split;
#[cfg(any(test, feature = "test_utils"))]
#[doc(hidden)]
pub mod test_utils;
pub mod traits;
pub mod types;

pub use crate::distance::{Manhattan, SquaredEuclidean};
pub use crate::distance_metric::DistanceMetric;
pub use crate::error::{KdTreeError, Result};
pub use crate::iter::{NodeIter, NodeView};
pub use crate::kdtree::KdTree;
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::point::Point;
pub use crate::point_set::BruteForcePointSet;
pub use crate::rect::Rect;
pub use crate::split::SplitAxis;
pub use crate::traits::PointIndex;
pub use crate::types::Axis;
