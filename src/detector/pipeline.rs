use super::params::DetectorParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DetectionReport, InputDescriptor, SegmentSummary, TimingBreakdown};
use crate::ellipse::EllipseGeometry;
use crate::features::{FeatureAggregator, Label};
use crate::hough::{ParallelSegmentRunner, SegmentOutcome};
use crate::image::EdgeMask;
use crate::segments::segment_edges;
use log::debug;
use std::time::Instant;

pub(crate) const STAGE_SEGMENTATION: &str = "segmentation";
pub(crate) const STAGE_HOUGH: &str = "hough";
pub(crate) const STAGE_FEATURES: &str = "features";

/// Edge mask → ellipses → feature vector.
#[derive(Clone, Debug)]
pub struct EllipseDetector {
    params: DetectorParams,
    runner: ParallelSegmentRunner,
    aggregator: FeatureAggregator,
}

impl EllipseDetector {
    /// Create a detector with the supplied parameters; fails when they are
    /// not usable (see [`DetectorParams::validate`]).
    pub fn new(params: DetectorParams) -> Result<Self, String> {
        params.validate()?;
        Ok(Self {
            params,
            runner: ParallelSegmentRunner::new(params.hough),
            aggregator: FeatureAggregator::new(),
        })
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detected ellipses only, at most one per segment.
    pub fn detect(&self, mask: &EdgeMask) -> Vec<EllipseGeometry> {
        let segments = segment_edges(mask, self.params.segmenter);
        self.runner.run(&segments)
    }

    /// Run every stage and return ellipses, features and diagnostics.
    pub fn process(&self, mask: &EdgeMask, label: Label) -> DetectionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            width: mask.width(),
            height: mask.height(),
            edge_pixels: mask.edge_count(),
        };
        debug!(
            "EllipseDetector::process start w={} h={} edge_pixels={}",
            input.width, input.height, input.edge_pixels
        );

        let segments = timings.time(STAGE_SEGMENTATION, || {
            segment_edges(mask, self.params.segmenter)
        });
        let runs = timings.time(STAGE_HOUGH, || self.runner.run_detailed(&segments));

        let summaries: Vec<SegmentSummary> = runs.iter().map(SegmentSummary::from).collect();
        let ellipses: Vec<EllipseGeometry> = runs
            .into_iter()
            .filter_map(|run| match run.outcome {
                SegmentOutcome::Detected(ellipse) => Some(ellipse),
                _ => None,
            })
            .collect();

        let features = timings.time(STAGE_FEATURES, || {
            self.aggregator.execute(&ellipses, mask.pixel_count(), label)
        });
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "EllipseDetector::process segments={} ellipses={} failed={} total_ms={:.3}",
            summaries.len(),
            ellipses.len(),
            summaries.iter().filter(|s| s.failed).count(),
            timings.total_ms
        );

        DetectionReport {
            input,
            ellipses,
            features,
            segments: summaries,
            timings,
        }
    }
}
