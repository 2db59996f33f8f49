//! Feature extraction: detected ellipses → classifier input.
//!
//! The classifier itself (training, grid search, inference) is an external
//! collaborator consuming [`FeatureVector`]s and producing a [`Label`].

mod aggregator;
mod label;
mod vector;

pub use aggregator::{
    median, FeatureAggregator, FEATURE_AREA, FEATURE_AXIS_RATIO, FEATURE_COVERAGE,
    FEATURE_NAMES, FEATURE_SEMI_MAJOR, FEATURE_SEMI_MINOR,
};
pub use label::Label;
pub use vector::FeatureVector;
