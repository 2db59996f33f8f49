//! Randomized Hough transform for ellipses on segmented edge points.
//!
//! For every unordered pair of edge points `(p1, p2)` of a segment, the pair
//! is assumed to span the major axis: `a = |p1 - p2| / 2`, center at the
//! midpoint. Every third point `p3` then implies a semi-minor axis through the
//! identity
//!
//! ```text
//! cos τ = (a² + d² − |p3 − p1|²) / (2ad),   d = |p3 − center|
//! b²    = a²d²(1 − cos²τ) / (a² − d²cos²τ)
//! ```
//!
//! and votes for it in a [`VoteAccumulator`]. A pair is accepted when its
//! winning bin collects strictly more than `accumulator_threshold` votes; the
//! best accepted pair of a segment becomes its detection.
//!
//! Degenerate geometry (third point too close to the center, `cos²τ >= 1`,
//! non-positive denominator) is skipped silently, as are votes outside
//! `[min_axis_length, max_axis_length)`.
//!
//! Complexity
//! - O(n³) per segment of `n` points; upstream segmentation is the only bound.
//!
//! Modules
//! - `accumulator` – the bounded histogram.
//! - `search` – the per-segment voting loop.
//! - `runner` – fork-join execution over all segments.

mod accumulator;
mod params;
mod runner;
mod search;

pub use accumulator::{AccumulatorPeak, VoteAccumulator};
pub use params::HoughParams;
pub use runner::{ParallelSegmentRunner, SegmentOutcome, SegmentRun};
pub use search::search;

#[cfg(test)]
mod tests;
