use serde::{Deserialize, Serialize};

/// Options controlling which connected components survive segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmenterOptions {
    /// Components with at most this many pixels are discarded.
    pub min_segment_size: usize,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            min_segment_size: 60,
        }
    }
}

impl SegmenterOptions {
    pub fn with_min_segment_size(mut self, min_segment_size: usize) -> Self {
        self.min_segment_size = min_segment_size;
        self
    }
}
