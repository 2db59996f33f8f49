use super::label::Label;
use serde::{Deserialize, Serialize};

/// Named numeric features of one image plus its label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureVector")]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
    label: Label,
}

/// Unchecked wire form; lengths are validated by [`FeatureVector::new`].
#[derive(Deserialize)]
struct RawFeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
    label: Label,
}

impl TryFrom<RawFeatureVector> for FeatureVector {
    type Error = String;

    fn try_from(raw: RawFeatureVector) -> Result<Self, Self::Error> {
        FeatureVector::new(raw.names, raw.values, raw.label)
    }
}

impl FeatureVector {
    /// `names` and `values` must have the same length.
    pub fn new(names: Vec<String>, values: Vec<f64>, label: Label) -> Result<Self, String> {
        if names.len() != values.len() {
            return Err(format!(
                "feature vector has {} names but {} values",
                names.len(),
                values.len()
            ));
        }
        Ok(Self {
            names,
            values,
            label,
        })
    }

    pub(super) fn from_parts(names: Vec<String>, values: Vec<f64>, label: Label) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self {
            names,
            values,
            label,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Same features under a different label (e.g. after classification).
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
