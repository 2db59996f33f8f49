use super::label::Label;
use super::vector::FeatureVector;
use crate::ellipse::EllipseGeometry;

pub const FEATURE_AXIS_RATIO: &str = "axis ratio";
pub const FEATURE_AREA: &str = "area";
pub const FEATURE_SEMI_MAJOR: &str = "a";
pub const FEATURE_SEMI_MINOR: &str = "b";
pub const FEATURE_COVERAGE: &str = "ellipse coverage";

/// Feature names in output order.
pub const FEATURE_NAMES: [&str; 5] = [
    FEATURE_AXIS_RATIO,
    FEATURE_AREA,
    FEATURE_SEMI_MAJOR,
    FEATURE_SEMI_MINOR,
    FEATURE_COVERAGE,
];

/// Reduces the ellipses detected in one image to a fixed-size feature vector.
///
/// Medians rather than means keep partial ellipses cut by the image border
/// from dominating the shape features.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureAggregator;

impl FeatureAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        ellipses: &[EllipseGeometry],
        image_pixel_count: usize,
        label: Label,
    ) -> FeatureVector {
        let mut ratios = Vec::with_capacity(ellipses.len());
        let mut areas = Vec::with_capacity(ellipses.len());
        let mut semi_major = Vec::with_capacity(ellipses.len());
        let mut semi_minor = Vec::with_capacity(ellipses.len());
        let mut total_area = 0.0;
        for e in ellipses {
            let area = e.area();
            ratios.push(e.axis_ratio());
            areas.push(area);
            semi_major.push(e.a);
            semi_minor.push(e.b);
            total_area += area;
        }

        let coverage = if image_pixel_count > 0 {
            total_area / image_pixel_count as f64
        } else {
            0.0
        };
        let values = vec![
            median(&mut ratios),
            median(&mut areas),
            median(&mut semi_major),
            median(&mut semi_minor),
            coverage,
        ];
        let names = FEATURE_NAMES.iter().map(|n| n.to_string()).collect();
        FeatureVector::from_parts(names, values, label)
    }
}

/// Median after an ascending sort; mean of the central pair for even lengths
/// and `0` for an empty slice.
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        0.5 * (values[mid - 1] + values[mid])
    }
}
