//! Ellipse detector orchestrating segmentation, parallel voting and feature
//! aggregation.
//!
//! Overview
//! - Splits the edge mask into 8-connected segments and drops small ones.
//! - Runs the three-point Hough voting search on every segment in parallel;
//!   each segment contributes at most one ellipse.
//! - Reduces the detected ellipses to a fixed feature vector for the
//!   external classifier.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`EllipseDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::EllipseDetector;
