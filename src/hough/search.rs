use super::accumulator::VoteAccumulator;
use super::params::HoughParams;
use crate::angle::{normalize_half_pi, perpendicular};
use crate::ellipse::EllipseGeometry;
use crate::point_grid::PointGrid;
use crate::types::Point;
use nalgebra::{center, distance, distance_squared};
use std::f64::consts::{FRAC_PI_2, PI};

/// Best ellipse supported by three-point voting over `points`, if any
/// candidate collects more than `params.accumulator_threshold` votes.
pub fn search(points: &[Point], params: &HoughParams) -> Option<EllipseGeometry> {
    EllipseVotingSearch::new(points, params).run()
}

/// Per-segment voting state. Owned by one worker; nothing here is shared.
pub(crate) struct EllipseVotingSearch<'a> {
    points: &'a [Point],
    params: &'a HoughParams,
    accumulator: VoteAccumulator,
    best: Option<Candidate>,
    support_index: Option<PointGrid>,
}

struct Candidate {
    ellipse: EllipseGeometry,
    /// Boundary support, computed lazily on the first tie.
    support: Option<usize>,
}

impl<'a> EllipseVotingSearch<'a> {
    pub(crate) fn new(points: &'a [Point], params: &'a HoughParams) -> Self {
        Self {
            points,
            params,
            accumulator: VoteAccumulator::new(
                params.min_axis_length,
                params.max_axis_length,
                params.accumulator_bin_size,
            ),
            best: None,
            support_index: None,
        }
    }

    pub(crate) fn run(mut self) -> Option<EllipseGeometry> {
        for i1 in 0..self.points.len() {
            for i2 in 0..i1 {
                if let Some(candidate) = self.evaluate_pair(self.points[i1], self.points[i2]) {
                    self.offer(candidate);
                }
            }
        }
        self.best.map(|c| c.ellipse)
    }

    /// Treat `p1`–`p2` as the major axis and let every other point vote for
    /// the semi-minor axis (Xie & Ji, "A new efficient ellipse detection
    /// method", 2002).
    fn evaluate_pair(&mut self, p1: Point, p2: Point) -> Option<EllipseGeometry> {
        let min_axis = self.params.min_axis_length;
        let max_axis = self.params.max_axis_length;

        let a = 0.5 * distance(&p1, &p2);
        if a <= 0.0 || a < 0.5 * min_axis || a >= max_axis {
            return None;
        }
        let mid = center(&p1, &p2);
        let a_sq = a * a;

        for p3 in self.points {
            let d = distance(p3, &mid);
            if d <= min_axis {
                continue;
            }
            let d_sq = d * d;
            let cos_tau = (a_sq + d_sq - distance_squared(p3, &p1)) / (2.0 * a * d);
            let cos_tau_sq = cos_tau * cos_tau;
            let k = a_sq - d_sq * cos_tau_sq;
            if k > 0.0 && cos_tau_sq < 1.0 {
                let b = (a_sq * d_sq * (1.0 - cos_tau_sq) / k).sqrt();
                if b >= min_axis && b < max_axis {
                    self.accumulator.add(b);
                }
            }
        }

        let peak = self.accumulator.find_max_and_clear();
        if peak.votes <= self.params.accumulator_threshold {
            return None;
        }
        let raw = (p1.x - p2.x).atan2(p1.y - p2.y);
        let (a, b, orientation) = normalize_axes(a, peak.center, raw);
        Some(EllipseGeometry::new(mid, a, b, orientation, peak.votes))
    }

    fn offer(&mut self, ellipse: EllipseGeometry) {
        let Some(best) = self.best.as_mut() else {
            self.best = Some(Candidate {
                ellipse,
                support: None,
            });
            return;
        };
        if ellipse.votes < best.ellipse.votes {
            return;
        }
        if ellipse.votes > best.ellipse.votes {
            *best = Candidate {
                ellipse,
                support: None,
            };
            return;
        }

        let params = self.params;
        let index = self
            .support_index
            .get_or_insert_with(|| PointGrid::new(self.points, params.support_tolerance.max(1.0)));
        let best_support = *best.support.get_or_insert_with(|| {
            best.ellipse
                .support(index, params.support_samples, params.support_tolerance)
        });
        let support = ellipse.support(index, params.support_samples, params.support_tolerance);
        if support > best_support {
            *best = Candidate {
                ellipse,
                support: Some(support),
            };
        }
    }
}

/// Maps the pair-axis angle onto the external orientation convention and
/// keeps `a` as the semi-major axis without changing the described ellipse.
pub(crate) fn normalize_axes(
    pair_axis: f64,
    voted_axis: f64,
    raw_orientation: f64,
) -> (f64, f64, f64) {
    let mut a = pair_axis;
    let mut b = voted_axis;
    let mut orientation = raw_orientation;
    if orientation != 0.0 {
        orientation = PI - orientation;
        if orientation > PI {
            orientation -= FRAC_PI_2;
            std::mem::swap(&mut a, &mut b);
        }
    }
    if a < b {
        std::mem::swap(&mut a, &mut b);
        orientation = perpendicular(orientation);
    }
    (a, b, normalize_half_pi(orientation))
}
