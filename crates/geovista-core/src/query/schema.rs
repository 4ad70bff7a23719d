//! Schema derivation: the dataset describes its own filterable attributes

use std::collections::BTreeSet;

use crate::error::{GeovistaError, Result};
use crate::models::feature::value_text;
use crate::models::PointDataset;

/// Attribute names available for filtering, in natural enumeration order.
///
/// The catalog is read from the first feature only, on the assumption that
/// all features share one attribute set. A feature with extra keys later in
/// the collection would not surface them here.
pub fn field_catalog(dataset: &PointDataset) -> Result<Vec<String>> {
    let first = dataset.features.first().ok_or(GeovistaError::EmptyDataset)?;
    Ok(first.properties.keys().cloned().collect())
}

/// Distinct stringified values of `field` across the whole dataset.
///
/// Null and absent values are excluded entirely; they are not selectable.
/// The result is deduplicated and sorted lexicographically, so `"10"` sorts
/// before `"2"`. Numeric-aware ordering is deliberately not applied.
pub fn distinct_values(dataset: &PointDataset, field: &str) -> Vec<String> {
    let mut values = BTreeSet::new();

    for feature in &dataset.features {
        match feature.properties.get(field) {
            Some(value) if !value.is_null() => {
                values.insert(value_text(value));
            }
            _ => {}
        }
    }

    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatasetInfo, FeatureId, PointFeature, Position};
    use chrono::Utc;
    use serde_json::{json, Map, Value};
    use std::path::PathBuf;

    fn dataset(rows: Vec<Vec<(&str, Value)>>) -> PointDataset {
        let features = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let mut props = Map::new();
                for (key, value) in row {
                    props.insert(key.to_string(), value);
                }
                PointFeature::new(
                    FeatureId(idx as u64),
                    Position { lat: -42.6, lng: -73.7 },
                    props,
                )
            })
            .collect::<Vec<_>>();

        PointDataset {
            info: DatasetInfo {
                name: "test".to_string(),
                path: PathBuf::from("test.geojson"),
                feature_count: features.len(),
                loaded_at: Utc::now(),
            },
            features,
        }
    }

    #[test]
    fn test_field_catalog_reads_first_feature_in_order() {
        let ds = dataset(vec![
            vec![("Nombre", json!("El Roble")), ("Tipo", json!("A"))],
            vec![("Nombre", json!("Otro")), ("Extra", json!(1))],
        ]);

        // Only the first feature's keys, in insertion order
        assert_eq!(field_catalog(&ds).unwrap(), vec!["Nombre", "Tipo"]);
    }

    #[test]
    fn test_field_catalog_empty_dataset_is_an_error() {
        let ds = dataset(vec![]);
        assert!(matches!(field_catalog(&ds), Err(GeovistaError::EmptyDataset)));
    }

    #[test]
    fn test_distinct_values_sorts_lexicographically() {
        let ds = dataset(vec![
            vec![("Superficie", json!("10"))],
            vec![("Superficie", json!("2"))],
            vec![("Superficie", json!("1"))],
        ]);

        assert_eq!(distinct_values(&ds, "Superficie"), vec!["1", "10", "2"]);
    }

    #[test]
    fn test_distinct_values_deduplicates() {
        let ds = dataset(vec![
            vec![("Tipo", json!("A"))],
            vec![("Tipo", json!("B"))],
            vec![("Tipo", json!("A"))],
        ]);

        assert_eq!(distinct_values(&ds, "Tipo"), vec!["A", "B"]);
    }

    #[test]
    fn test_distinct_values_excludes_null_and_absent() {
        let ds = dataset(vec![
            vec![("Tipo", json!("A"))],
            vec![("Tipo", Value::Null)],
            vec![("Otro", json!("x"))],
        ]);

        assert_eq!(distinct_values(&ds, "Tipo"), vec!["A"]);
    }

    #[test]
    fn test_distinct_values_stringifies_numbers() {
        let ds = dataset(vec![vec![("N", json!(10))], vec![("N", json!(2))]]);

        assert_eq!(distinct_values(&ds, "N"), vec!["10", "2"]);
    }

    #[test]
    fn test_distinct_values_unknown_field_is_empty() {
        let ds = dataset(vec![vec![("Tipo", json!("A"))]]);
        assert!(distinct_values(&ds, "NoSuchField").is_empty());
    }
}
