use super::*;
use crate::angle::axis_difference;
use crate::ellipse::EllipseGeometry;
use crate::point_grid::PointGrid;
use crate::types::Point;
use std::f64::consts::{FRAC_PI_2, TAU};

fn params() -> HoughParams {
    HoughParams::default()
        .with_threshold(5)
        .with_bin_size(0.5)
        .with_axis_range(4.0, 100.0)
}

#[test]
fn recovers_ideal_ellipse_from_boundary_samples() {
    let truth = EllipseGeometry::new(Point::new(50.0, 50.0), 20.0, 10.0, 0.0, 0);
    let points = truth.boundary_points(360);
    let params = params();

    let found = search(&points, &params).expect("ideal ellipse must be detected");
    let tol = params.accumulator_bin_size + 1e-9;
    assert!((found.a - 20.0).abs() <= tol, "a={}", found.a);
    assert!((found.b - 10.0).abs() <= tol, "b={}", found.b);
    assert!((found.center.x - 50.0).abs() < 0.5 && (found.center.y - 50.0).abs() < 0.5);
    // Horizontal major axis in the y-referenced convention.
    assert!(
        axis_difference(found.orientation, FRAC_PI_2) < 0.05,
        "orientation={}",
        found.orientation
    );
    assert!(found.votes > params.accumulator_threshold);
}

/// `n` samples of the ellipse with major axis along `(cos theta, sin theta)`.
fn rotated_outline(center: Point, a: f64, b: f64, theta: f64, n: usize) -> Vec<Point> {
    let (s, c) = theta.sin_cos();
    (0..n)
        .map(|i| {
            let t = i as f64 * TAU / n as f64;
            let (u, v) = (a * t.cos(), b * t.sin());
            Point::new(center.x + u * c - v * s, center.y + u * s + v * c)
        })
        .collect()
}

#[test]
fn recovers_orientation_of_rotated_ellipses() {
    let params = params();
    let center = Point::new(50.0, 50.0);
    for theta in [0.3, 0.6, 1.0, 2.0, 2.9] {
        let points = rotated_outline(center, 20.0, 10.0, theta, 360);
        let found = search(&points, &params).expect("rotated ellipse must be detected");

        let tol = params.accumulator_bin_size + 1e-9;
        assert!((found.a - 20.0).abs() <= tol, "theta={theta} a={}", found.a);
        assert!((found.b - 10.0).abs() <= tol, "theta={theta} b={}", found.b);
        assert!(
            axis_difference(found.orientation, theta + FRAC_PI_2) < 0.05,
            "theta={theta} orientation={}",
            found.orientation
        );

        // The reported geometry traces the input outline.
        let grid = PointGrid::new(points.iter(), 1.0);
        let support = found.support(&grid, 360, 1.0);
        assert!(support >= 350, "theta={theta} support={support}");
    }
}

#[test]
fn collinear_points_never_vote() {
    let points: Vec<Point> = (0..60).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
    assert!(search(&points, &params()).is_none());
}

#[test]
fn threshold_is_strict() {
    let truth = EllipseGeometry::new(Point::new(30.0, 30.0), 12.0, 6.0, 0.0, 0);
    let points = truth.boundary_points(40);
    let found = search(&points, &params()).expect("detected with a low threshold");

    let at_best = params().with_threshold(found.votes);
    assert!(
        search(&points, &at_best).is_none(),
        "votes == threshold must be rejected"
    );
    let below_best = params().with_threshold(found.votes - 1);
    let again = search(&points, &below_best).expect("votes > threshold accepted");
    assert_eq!(again.votes, found.votes);
}

#[test]
fn tiny_and_empty_segments_are_normal_misses() {
    let params = params();
    assert!(search(&[], &params).is_none());
    assert!(search(&[Point::new(1.0, 1.0)], &params).is_none());
    let duplicate = [Point::new(3.0, 3.0), Point::new(3.0, 3.0), Point::new(3.0, 3.0)];
    assert!(search(&duplicate, &HoughParams { min_axis_length: 0.0, ..params }).is_none());
}

#[test]
fn runner_matches_direct_search() {
    use crate::segments::{Segment, SegmentId};
    let left = EllipseGeometry::new(Point::new(30.0, 30.0), 14.0, 7.0, 0.0, 0);
    let right = EllipseGeometry::new(Point::new(90.0, 40.0), 16.0, 9.0, 0.0, 0);
    let segments = vec![
        Segment::new(SegmentId(0), left.boundary_points(90)),
        Segment::new(SegmentId(1), right.boundary_points(90)),
    ];
    let params = params();
    let merged = ParallelSegmentRunner::new(params).run(&segments);
    assert_eq!(merged.len(), 2);
    for (seg, ellipse) in segments.iter().zip(&merged) {
        assert_eq!(search(&seg.points, &params).as_ref(), Some(ellipse));
    }
}
