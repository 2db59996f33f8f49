//! Parameter types configuring the detector stages.

use crate::hough::HoughParams;
use crate::segments::SegmenterOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorParams {
    /// Connected-component size gate.
    pub segmenter: SegmenterOptions,
    /// Voting search tunables.
    pub hough: HoughParams,
}

impl DetectorParams {
    pub fn validate(&self) -> Result<(), String> {
        self.hough.validate()
    }
}
