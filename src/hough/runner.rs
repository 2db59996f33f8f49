use super::params::HoughParams;
use super::search::search;
use crate::ellipse::EllipseGeometry;
use crate::segments::{Segment, SegmentId};
use crate::types::Point;
use log::{debug, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What one segment's worker produced.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentOutcome {
    Detected(EllipseGeometry),
    NoDetection,
    /// The worker panicked; the segment contributes nothing.
    Failed,
}

/// Per-segment result, in segment order.
#[derive(Clone, Debug)]
pub struct SegmentRun {
    pub segment: SegmentId,
    pub points: usize,
    pub outcome: SegmentOutcome,
}

/// Fork-join runner: one independent voting search per segment.
///
/// Each task owns its accumulator and loop state; results travel back as task
/// return values and are merged after the join. With the `parallel` feature
/// tasks run on the rayon pool, otherwise sequentially; both give the same
/// result.
#[derive(Clone, Debug)]
pub struct ParallelSegmentRunner {
    params: HoughParams,
}

impl ParallelSegmentRunner {
    pub fn new(params: HoughParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &HoughParams {
        &self.params
    }

    /// Detected ellipses, at most one per segment.
    pub fn run(&self, segments: &[Segment]) -> Vec<EllipseGeometry> {
        self.run_detailed(segments)
            .into_iter()
            .filter_map(|run| match run.outcome {
                SegmentOutcome::Detected(ellipse) => Some(ellipse),
                _ => None,
            })
            .collect()
    }

    /// One [`SegmentRun`] per input segment; blocks until all are done.
    pub fn run_detailed(&self, segments: &[Segment]) -> Vec<SegmentRun> {
        self.run_with(segments, search)
    }

    pub(crate) fn run_with<F>(&self, segments: &[Segment], search_fn: F) -> Vec<SegmentRun>
    where
        F: Fn(&[Point], &HoughParams) -> Option<EllipseGeometry> + Sync,
    {
        let params = &self.params;
        let worker = |segment: &Segment| run_segment(segment, params, &search_fn);
        #[cfg(feature = "parallel")]
        {
            segments.par_iter().map(worker).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            segments.iter().map(worker).collect()
        }
    }
}

fn run_segment<F>(segment: &Segment, params: &HoughParams, search_fn: &F) -> SegmentRun
where
    F: Fn(&[Point], &HoughParams) -> Option<EllipseGeometry>,
{
    let result = catch_unwind(AssertUnwindSafe(|| search_fn(&segment.points, params)));
    let outcome = match result {
        Ok(Some(ellipse)) => {
            debug!(
                "hough segment={} points={} a={:.2} b={:.2} votes={}",
                segment.id.0,
                segment.len(),
                ellipse.a,
                ellipse.b,
                ellipse.votes
            );
            SegmentOutcome::Detected(ellipse)
        }
        Ok(None) => SegmentOutcome::NoDetection,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(
                "hough worker for segment {} ({} points) failed: {msg}",
                segment.id.0,
                segment.len()
            );
            SegmentOutcome::Failed
        }
    };
    SegmentRun {
        segment: segment.id,
        points: segment.len(),
        outcome,
    }
}
