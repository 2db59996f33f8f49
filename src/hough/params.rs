use serde::{Deserialize, Serialize};

/// Tunables of the ellipse voting search.
///
/// Axis limits apply to semi-axes (center to boundary), in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    /// A candidate is accepted when its winning bin has strictly more votes.
    pub accumulator_threshold: i32,
    /// Width of one accumulator bin; also the resolution of the semi-minor axis.
    pub accumulator_bin_size: f64,
    /// Smallest accepted semi-minor axis. Point pairs closer than this are
    /// skipped, as are third points within this distance of the center.
    pub min_axis_length: f64,
    /// Exclusive upper bound for both semi-axes.
    pub max_axis_length: f64,
    /// Boundary samples used to score support when two candidates tie on votes.
    pub support_samples: usize,
    /// Distance within which a boundary sample counts as supported by an edge point.
    pub support_tolerance: f64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            accumulator_threshold: 2,
            accumulator_bin_size: 0.25,
            min_axis_length: 4.0,
            max_axis_length: 100.0,
            support_samples: 360,
            support_tolerance: 1.5,
        }
    }
}

impl HoughParams {
    /// Checks the values the accumulator and the search rely on.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.accumulator_bin_size.is_finite() && self.accumulator_bin_size > 0.0) {
            return Err(format!(
                "hough: accumulator bin size must be positive, got {}",
                self.accumulator_bin_size
            ));
        }
        if !(self.max_axis_length.is_finite()
            && self.min_axis_length >= 0.0
            && self.min_axis_length < self.max_axis_length)
        {
            return Err(format!(
                "hough: axis range must satisfy 0 <= min < max, got [{}, {})",
                self.min_axis_length, self.max_axis_length
            ));
        }
        Ok(())
    }

    pub fn with_threshold(mut self, accumulator_threshold: i32) -> Self {
        self.accumulator_threshold = accumulator_threshold;
        self
    }

    pub fn with_bin_size(mut self, accumulator_bin_size: f64) -> Self {
        self.accumulator_bin_size = accumulator_bin_size;
        self
    }

    pub fn with_axis_range(mut self, min_axis_length: f64, max_axis_length: f64) -> Self {
        self.min_axis_length = min_axis_length;
        self.max_axis_length = max_axis_length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(HoughParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_bins_and_axis_ranges() {
        for bin in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = HoughParams::default().with_bin_size(bin).validate().unwrap_err();
            assert!(err.contains("bin size"), "bin={bin}: {err}");
        }
        for (min, max) in [(10.0, 10.0), (-1.0, 5.0), (4.0, f64::INFINITY), (f64::NAN, 5.0)] {
            let err = HoughParams::default()
                .with_axis_range(min, max)
                .validate()
                .unwrap_err();
            assert!(err.contains("axis range"), "[{min}, {max}): {err}");
        }
    }
}
