//! Intensity derivation for heatmap rendering

use crate::models::PointFeature;

/// Maps one designated percentage-valued attribute to a heat intensity.
#[derive(Debug, Clone)]
pub struct IntensityMapper {
    field: String,
}

impl IntensityMapper {
    /// Bind the mapper to the attribute holding the percentage value
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    /// The attribute this mapper reads
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Intensity of one feature in `[0, 1]`.
    ///
    /// The attribute is stringified, normalized from a comma decimal
    /// separator, parsed as a percentage and divided by 100. A missing,
    /// null, or non-numeric value yields 0.0; malformed data never errors.
    pub fn intensity(&self, feature: &PointFeature) -> f64 {
        parse_decimal_comma(&feature.property_text(&self.field))
            .map(|pct| pct / 100.0)
            .unwrap_or(0.0)
    }
}

/// Parse a number written with a comma decimal separator ("45,5" -> 45.5).
///
/// The source dataset uses the comma convention throughout; this is the one
/// place that knowledge lives. Plain dot-separated numbers parse unchanged.
pub fn parse_decimal_comma(text: &str) -> Option<f64> {
    text.replace(',', ".").trim().parse::<f64>().ok()
}
