//! Diagnostics data model returned by the detector and written by the tools.
//!
//! `DetectionReport` is the main entry point: the detected ellipses, the
//! feature vector derived from them, and a per-segment trace with stage
//! timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, SegmentSummary};
pub use timing::{StageTiming, TimingBreakdown};
