//! The filter engine: pure, stable selection over the loaded features

use crate::models::feature::value_text;
use crate::models::{FilterCriteria, PointFeature};

/// Select the features matching `criteria`.
///
/// Both constraints combine with AND semantics; an inactive constraint is
/// vacuously true, so empty criteria return the full input. The result is a
/// stable sub-sequence: kept features appear in their original order.
pub fn apply_filters(features: &[PointFeature], criteria: &FilterCriteria) -> Vec<PointFeature> {
    let needle = criteria.free_text.to_lowercase();

    features
        .iter()
        .filter(|feature| {
            let mut keep = true;

            if criteria.has_text() {
                keep = matches_text(feature, &needle);
            }

            if keep && criteria.has_field_value() {
                let field = criteria.field.as_deref().unwrap_or_default();
                let value = criteria.value.as_deref().unwrap_or_default();
                keep = feature.property_text(field) == value;
            }

            keep
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match against every attribute value.
///
/// Values are stringified first, so a null attribute matches the text
/// "null". `needle_lower` must already be lower-cased.
fn matches_text(feature: &PointFeature, needle_lower: &str) -> bool {
    feature
        .properties
        .values()
        .any(|value| value_text(value).to_lowercase().contains(needle_lower))
}
