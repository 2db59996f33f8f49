//! Angle utilities used by the ellipse orientation convention.

use std::f64::consts::{FRAC_PI_2, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f64) -> f64 {
    let mut norm = angle.rem_euclid(PI);
    if norm >= PI {
        norm -= PI;
    }
    if norm >= PI - 1e-12 {
        0.0
    } else {
        norm
    }
}

/// Rotates an axis direction by a quarter turn, folded into [0, π).
#[inline]
pub fn perpendicular(angle: f64) -> f64 {
    normalize_half_pi(angle + FRAC_PI_2)
}

/// Smallest unsigned difference between two axis directions, treating
/// antipodal directions as equivalent. Returns a value in [0, π/2].
#[inline]
pub fn axis_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(PI);
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}
