//! Detected ellipse description and boundary sampling.
use crate::point_grid::PointGrid;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// An ellipse accepted by the voting search.
///
/// `a` is the semi-major and `b` the semi-minor axis (`a >= b`), both in
/// pixels. `orientation` is the major-axis angle in radians within `[0, π)`,
/// measured from the image y axis. `votes` is the count of the winning
/// accumulator bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipseGeometry {
    pub center: Point,
    pub a: f64,
    pub b: f64,
    pub orientation: f64,
    pub votes: i32,
}

impl EllipseGeometry {
    pub fn new(center: Point, a: f64, b: f64, orientation: f64, votes: i32) -> Self {
        Self {
            center,
            a,
            b,
            orientation,
            votes,
        }
    }

    /// Elongation `max(a/b, b/a)`, always `>= 1` for positive axes.
    pub fn axis_ratio(&self) -> f64 {
        (self.a / self.b).max(self.b / self.a)
    }

    pub fn area(&self) -> f64 {
        PI * self.a * self.b
    }

    /// `n` points `center + (a·cos(θ + orientation), b·sin(θ + orientation))`
    /// for `θ` evenly spaced over `[0, 2π)`.
    ///
    /// The orientation only shifts the phase; the curve is always axis
    /// aligned. Use [`outline_points`](Self::outline_points) for the rotated
    /// outline.
    pub fn boundary_points(&self, n: usize) -> Vec<Point> {
        if n == 0 {
            return Vec::new();
        }
        let step = TAU / n as f64;
        (0..n)
            .map(|i| {
                let angle = i as f64 * step + self.orientation;
                Point::new(
                    self.center.x + self.a * angle.cos(),
                    self.center.y + self.b * angle.sin(),
                )
            })
            .collect()
    }

    /// `n` points on the rotated outline, major axis along
    /// `(sin orientation, -cos orientation)`.
    pub fn outline_points(&self, n: usize) -> Vec<Point> {
        if n == 0 {
            return Vec::new();
        }
        let (s, c) = (self.orientation - FRAC_PI_2).sin_cos();
        let step = TAU / n as f64;
        (0..n)
            .map(|i| {
                let t = i as f64 * step;
                let (u, v) = (self.a * t.cos(), self.b * t.sin());
                Point::new(self.center.x + u * c - v * s, self.center.y + u * s + v * c)
            })
            .collect()
    }

    /// Number of `samples` outline points with an indexed edge point within
    /// `tolerance`.
    pub fn support(&self, edges: &PointGrid, samples: usize, tolerance: f64) -> usize {
        self.outline_points(samples)
            .iter()
            .filter(|p| edges.contains_near(p, tolerance))
            .count()
    }
}
