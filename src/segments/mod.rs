//! Connected-component segmentation of a binary edge mask.
//!
//! The ellipse search is cubic in the number of points it looks at, so the
//! mask is first split into independent point sets: every maximal group of
//! edge pixels connected through the 8-neighbourhood becomes one [`Segment`].
//! Each ellipse in a clean edge image ends up in its own segment, which both
//! bounds the search cost and lets segments be processed in parallel.
//!
//! The algorithm performs:
//!
//! - Edge map construction: a mutable copy of the mask with a live count of
//!   remaining edge cells, so "is anything left" is O(1).
//! - Seeding: the first remaining edge cell in row-major order. A forward-only
//!   cursor keeps seeding linear over the whole run and makes the output
//!   deterministic for a given mask.
//! - Breadth-first flood fill over the 8-neighbourhood. Cells are cleared the
//!   moment they are enqueued, so no cell is visited or counted twice.
//! - Size gate: segments with `len <= min_segment_size` are dropped entirely.
//!
//! Complexity
//! - Every cell is enqueued at most once: O(W·H) per mask.
//!
//! See also
//! - `crate::hough` for the per-segment voting search.

mod edge_map;
mod extractor;
mod options;
mod segment;

pub use edge_map::EdgeMap;
pub use options::SegmenterOptions;
pub use segment::{Segment, SegmentId};

use crate::image::EdgeMask;

/// Split `mask` into 8-connected segments larger than `options.min_segment_size`.
pub fn segment_edges(mask: &EdgeMask, options: SegmenterOptions) -> Vec<Segment> {
    extractor::SegmentExtractor::new(mask, options).extract()
}

#[cfg(test)]
mod tests;
