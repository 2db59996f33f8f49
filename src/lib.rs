#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod ellipse;
pub mod features;
pub mod image;
pub mod types;

// Lower-level building blocks, public for tools and tests.
pub mod angle;
pub mod hough;
pub mod point_grid;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, EllipseDetector};
pub use crate::ellipse::EllipseGeometry;
pub use crate::features::{FeatureVector, Label};
pub use crate::types::Point;

// Structured report returned by the detector.
pub use crate::diagnostics::DetectionReport;

// Stage options, handy when building params by hand.
pub use crate::hough::HoughParams;
pub use crate::image::EdgeMask;
pub use crate::segments::SegmenterOptions;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ellipse_detector::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let mut mask = EdgeMask::new(128, 128);
/// for i in 0..720 {
///     let t = i as f64 * std::f64::consts::TAU / 720.0;
///     let x = (64.0 + 40.0 * t.cos()).round() as i64;
///     let y = (64.0 + 25.0 * t.sin()).round() as i64;
///     mask.set_checked(x, y, true);
/// }
///
/// let detector = EllipseDetector::new(DetectorParams::default())?;
/// let report = detector.process(&mask, Label::Unknown);
/// println!("ellipses={} total_ms={:.3}", report.ellipses.len(), report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::EdgeMask;
    pub use crate::{DetectorParams, EllipseDetector, EllipseGeometry, FeatureVector, Label};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::features::FeatureAggregator;
    pub use crate::hough::{search, ParallelSegmentRunner, SegmentOutcome, SegmentRun};
    pub use crate::segments::{segment_edges, Segment, SegmentId};

    // Structured diagnostics types.
    pub use crate::diagnostics::{InputDescriptor, SegmentSummary, StageTiming, TimingBreakdown};
}
