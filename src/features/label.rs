use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defect class of a fabric sample, shared with the external classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    NoStretch,
    MediumStretch,
    MaximumStretch,
    Sheared,
    Disturbance,
    #[default]
    Unknown,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::NoStretch,
        Label::MediumStretch,
        Label::MaximumStretch,
        Label::Sheared,
        Label::Disturbance,
        Label::Unknown,
    ];

    /// Integer code used by the classifier and the data files (1..=6).
    pub fn code(self) -> u8 {
        match self {
            Label::NoStretch => 1,
            Label::MediumStretch => 2,
            Label::MaximumStretch => 3,
            Label::Sheared => 4,
            Label::Disturbance => 5,
            Label::Unknown => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Label> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Classifier outputs are floating point; accept anything that rounds to a code.
    pub fn from_numeric(value: f64) -> Option<Label> {
        let rounded = value.round();
        if (value - rounded).abs() >= 0.1 || !(1.0..=6.0).contains(&rounded) {
            return None;
        }
        Self::from_code(rounded as u8)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::NoStretch => "NO_STRETCH",
            Label::MediumStretch => "MEDIUM_STRETCH",
            Label::MaximumStretch => "MAXIMUM_STRETCH",
            Label::Sheared => "SHEARED",
            Label::Disturbance => "DISTURBANCE",
            Label::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Label::from_code(code).ok_or_else(|| format!("Unknown label code {code}"));
        }
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown label '{trimmed}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_one_based_and_bijective() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.code() as usize, i + 1);
            assert_eq!(Label::from_code(label.code()), Some(*label));
        }
        assert_eq!(Label::from_code(0), None);
        assert_eq!(Label::from_code(7), None);
    }

    #[test]
    fn numeric_codes_tolerate_float_noise() {
        assert_eq!(Label::from_numeric(3.0000001), Some(Label::MaximumStretch));
        assert_eq!(Label::from_numeric(4.5), None);
        assert_eq!(Label::from_numeric(0.0), None);
    }

    #[test]
    fn parses_names_and_codes() {
        assert_eq!("SHEARED".parse::<Label>(), Ok(Label::Sheared));
        assert_eq!(" no_stretch ".parse::<Label>(), Ok(Label::NoStretch));
        assert_eq!("5".parse::<Label>(), Ok(Label::Disturbance));
        assert!("STRETCHY".parse::<Label>().is_err());
        for label in Label::ALL {
            assert_eq!(label.to_string().parse::<Label>(), Ok(label));
        }
    }

    #[test]
    fn serde_uses_the_same_names() {
        let json = serde_json::to_string(&Label::MediumStretch).unwrap();
        assert_eq!(json, "\"MEDIUM_STRETCH\"");
    }
}
