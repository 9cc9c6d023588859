//! Seeded random data for tests and benchmarks.
use num_traits::NumCast;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::kdtree::KdTree;
use crate::point::Point;
use crate::point_set::BruteForcePointSet;
use crate::rect::Rect;
use crate::types::Axis;

fn rand_coord<A: Axis, R: Rng>(rng: &mut R) -> A {
    <A as NumCast>::from(rng.random::<f64>()).unwrap()
}

/// A point drawn uniformly from the unit square.
pub fn rand_point<A: Axis, R: Rng>(rng: &mut R) -> Point<A> {
    Point::new(rand_coord(rng), rand_coord(rng)).unwrap()
}

/// A rectangle inside the unit square with uniformly drawn corners.
pub fn rand_rect<A: Axis, R: Rng>(rng: &mut R) -> Rect<A> {
    let (x0, x1): (A, A) = (rand_coord(rng), rand_coord(rng));
    let (y0, y1): (A, A) = (rand_coord(rng), rand_coord(rng));

    Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)).unwrap()
}

/// `count` points from the unit square, reproducible for a given `seed`.
pub fn rand_points<A: Axis>(count: usize, seed: u64) -> Vec<Point<A>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rand_point(&mut rng)).collect()
}

/// `count` rectangles inside the unit square, reproducible for a given `seed`.
pub fn rand_rects<A: Axis>(count: usize, seed: u64) -> Vec<Rect<A>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rand_rect(&mut rng)).collect()
}

/// A tree and a brute force set holding the same `size` random points.
pub fn build_populated_tree_and_point_set<A: Axis>(
    size: usize,
    seed: u64,
) -> (KdTree<A>, BruteForcePointSet<A>) {
    let points = rand_points(size, seed);
    let mut tree = KdTree::with_capacity(size);
    for point in &points {
        tree.insert(*point).unwrap();
    }

    (tree, points.into_iter().collect())
}

/// Installs a `tracing` subscriber that writes through the test harness.
/// Safe to call from every test.
pub fn init_test_logging() {
    #[cfg(feature = "tracing")]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }
}
