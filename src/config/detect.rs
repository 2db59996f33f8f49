use crate::detector::DetectorParams;
use crate::features::Label;
use crate::hough::HoughParams;
use crate::image::mask::DEFAULT_EDGE_THRESHOLD;
use crate::segments::SegmenterOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectToolConfig {
    /// Edge image produced by the preprocessing stage.
    pub input: PathBuf,
    /// Gray level at or above which a pixel is an edge.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: u8,
    /// Label attached to the feature vector, when known.
    #[serde(default)]
    pub label: Label,
    #[serde(default)]
    pub segmenter: SegmenterOptions,
    #[serde(default)]
    pub hough: HoughParams,
    pub output: DetectOutputConfig,
}

impl DetectToolConfig {
    pub fn detector_params(&self) -> DetectorParams {
        DetectorParams {
            segmenter: self.segmenter,
            hough: self.hough,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectOutputConfig {
    pub report_json: PathBuf,
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    #[serde(default = "default_boundary_samples")]
    pub boundary_samples: usize,
}

fn default_edge_threshold() -> u8 {
    DEFAULT_EDGE_THRESHOLD
}

fn default_boundary_samples() -> usize {
    720
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<DetectToolConfig, String> {
    let config: DetectToolConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
    config.detector_params().validate()?;
    Ok(config)
}
