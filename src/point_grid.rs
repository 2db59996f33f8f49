//! Spatial bucket index for approximate point lookup.
//!
//! Points are hashed by the integer cell `(floor(x / cell), floor(y / cell))`
//! they fall into. A radius query only inspects the cells overlapping the
//! query disc, so lookups stay consistent with hashing for any tolerance.
use crate::types::{points_within, Point};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct PointGrid {
    cell: f64,
    buckets: HashMap<(i64, i64), Vec<Point>>,
    len: usize,
}

impl PointGrid {
    /// Index `points` with square buckets of side `cell` (pixels).
    pub fn new<'a>(points: impl IntoIterator<Item = &'a Point>, cell: f64) -> Self {
        assert!(
            cell.is_finite() && cell > 0.0,
            "point grid cell size must be positive, got {cell}"
        );
        let mut grid = Self {
            cell,
            buckets: HashMap::new(),
            len: 0,
        };
        for p in points {
            grid.insert(*p);
        }
        grid
    }

    #[inline]
    fn key(&self, p: &Point) -> (i64, i64) {
        (
            (p.x / self.cell).floor() as i64,
            (p.y / self.cell).floor() as i64,
        )
    }

    pub fn insert(&mut self, p: Point) {
        let key = self.key(&p);
        self.buckets.entry(key).or_default().push(p);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when some indexed point lies within `tolerance` of `p`.
    pub fn contains_near(&self, p: &Point, tolerance: f64) -> bool {
        if !p.x.is_finite() || !p.y.is_finite() || tolerance < 0.0 {
            return false;
        }
        let (kx, ky) = self.key(p);
        let reach = ((tolerance / self.cell).ceil() as i64).max(1);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if let Some(bucket) = self.buckets.get(&(kx + dx, ky + dy)) {
                    if bucket.iter().any(|q| points_within(p, q, tolerance)) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_neighbours_across_bucket_borders() {
        let pts = [Point::new(9.9, 9.9), Point::new(30.0, 5.0)];
        let grid = PointGrid::new(pts.iter(), 2.0);
        assert_eq!(grid.len(), 2);
        assert!(grid.contains_near(&Point::new(10.1, 10.1), 0.5));
        assert!(!grid.contains_near(&Point::new(11.0, 11.0), 1.0));
        assert!(grid.contains_near(&Point::new(30.0, 9.0), 4.0));
        assert!(!grid.contains_near(&Point::new(f64::NAN, 0.0), 100.0));
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let grid = PointGrid::new(std::iter::empty(), 1.0);
        assert!(grid.is_empty());
        assert!(!grid.contains_near(&Point::new(0.0, 0.0), 10.0));
    }
}
