use crate::diagnostics::TimingBreakdown;
use crate::ellipse::EllipseGeometry;
use crate::features::FeatureVector;
use crate::hough::{SegmentOutcome, SegmentRun};
use crate::segments::SegmentId;
use serde::Serialize;

/// Result produced by [`EllipseDetector::process`](crate::EllipseDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    pub ellipses: Vec<EllipseGeometry>,
    pub features: FeatureVector,
    pub segments: Vec<SegmentSummary>,
    pub timings: TimingBreakdown,
}

impl DetectionReport {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn failed_segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments
            .iter()
            .filter(|s| s.failed)
            .map(|s| s.segment)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
}

/// Per-segment outcome of the voting stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    pub segment: SegmentId,
    pub points: usize,
    pub detected: bool,
    pub failed: bool,
}

impl From<&SegmentRun> for SegmentSummary {
    fn from(run: &SegmentRun) -> Self {
        Self {
            segment: run.segment,
            points: run.points,
            detected: matches!(run.outcome, SegmentOutcome::Detected(_)),
            failed: run.outcome == SegmentOutcome::Failed,
        }
    }
}
