//! Shared value types.

use nalgebra::{distance_squared, Point2};

/// Immutable 2D coordinate in pixel units.
pub type Point = Point2<f64>;

/// Approximate point equality: true when `a` and `b` are within `tolerance`
/// (Euclidean). Not transitive, so it must never back `Eq`/`Hash`; use
/// [`crate::point_grid::PointGrid`] for set-like lookups.
#[inline]
pub fn points_within(a: &Point, b: &Point, tolerance: f64) -> bool {
    distance_squared(a, b) <= tolerance * tolerance
}
