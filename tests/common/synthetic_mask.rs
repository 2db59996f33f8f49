use ellipse_detector::image::EdgeMask;
use ellipse_detector::types::Point;
use std::f64::consts::TAU;

/// Parametric description of a synthetic ellipse outline.
#[derive(Clone, Copy, Debug)]
pub struct EllipseOutline {
    pub cx: f64,
    pub cy: f64,
    pub a: f64,
    pub b: f64,
    pub theta: f64,
}

impl EllipseOutline {
    pub fn new(cx: f64, cy: f64, a: f64, b: f64, theta: f64) -> Self {
        Self { cx, cy, a, b, theta }
    }

    /// `n` evenly spaced boundary points, starting at the end of the `a` axis.
    pub fn boundary(&self, n: usize) -> Vec<Point> {
        assert!(n > 0, "sample count must be positive");
        let (s, c) = self.theta.sin_cos();
        (0..n)
            .map(|i| {
                let t = i as f64 * TAU / n as f64;
                let (u, v) = (self.a * t.cos(), self.b * t.sin());
                Point::new(self.cx + u * c - v * s, self.cy + u * s + v * c)
            })
            .collect()
    }
}

/// Rasterizes the outlines into a fresh mask.
///
/// Sampling is dense enough that consecutive samples land on the same or an
/// 8-adjacent pixel, so each outline forms one connected component.
pub fn ellipse_mask(width: usize, height: usize, ellipses: &[EllipseOutline]) -> EdgeMask {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut mask = EdgeMask::new(width, height);
    for outline in ellipses {
        let samples = ((outline.a.max(outline.b) * TAU * 4.0).ceil() as usize).max(720);
        for p in outline.boundary(samples) {
            mask.set_checked(p.x.round() as i64, p.y.round() as i64, true);
        }
    }
    mask
}
