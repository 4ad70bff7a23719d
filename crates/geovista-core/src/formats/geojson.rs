//! GeoJSON dataset reader

use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;

use crate::error::{GeovistaError, Result};
use crate::formats::DatasetReader;
use crate::models::{DatasetInfo, FeatureId, PointDataset, PointFeature, Position};

/// Reads a GeoJSON FeatureCollection of point features
pub struct GeoJsonReader;

#[async_trait]
impl DatasetReader for GeoJsonReader {
    async fn read(&self, path: &Path) -> Result<PointDataset> {
        let content = tokio::fs::read_to_string(path).await.map_err(GeovistaError::Io)?;

        let geojson: geojson::GeoJson = content.parse().map_err(|e| GeovistaError::DatasetParse {
            reason: format!("Failed to parse GeoJSON: {}", e),
        })?;

        let collection = match geojson {
            geojson::GeoJson::FeatureCollection(fc) => fc,
            other => {
                return Err(GeovistaError::DatasetParse {
                    reason: format!("Expected a FeatureCollection, got {}", type_name(&other)),
                })
            }
        };

        let mut features = Vec::with_capacity(collection.features.len());
        for (idx, feature) in collection.features.into_iter().enumerate() {
            match convert_feature(feature, idx) {
                Some(feature) => features.push(feature),
                None => {
                    tracing::warn!(index = idx, "Skipping feature without a point geometry");
                }
            }
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();

        tracing::debug!(name = %name, count = features.len(), "Loaded point dataset");

        Ok(PointDataset {
            info: DatasetInfo {
                name,
                path: path.to_path_buf(),
                feature_count: features.len(),
                loaded_at: Utc::now(),
            },
            features,
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json", "geojson"]
    }

    fn format_name(&self) -> &str {
        "GeoJSON"
    }
}

/// Convert one GeoJSON feature. Returns None for anything but a Point
/// geometry; the viewer only renders points.
fn convert_feature(feature: geojson::Feature, idx: usize) -> Option<PointFeature> {
    let geometry = feature.geometry?;
    let position = match geometry.value {
        // GeoJSON coordinate order is [lng, lat]
        geojson::Value::Point(coords) if coords.len() >= 2 => {
            Position { lat: coords[1], lng: coords[0] }
        }
        _ => return None,
    };

    // The GeoJSON `id` member wins; the enumeration index covers features
    // without one (or with a non-numeric one)
    let id = match &feature.id {
        Some(geojson::feature::Id::Number(n)) => n.as_u64().unwrap_or(idx as u64),
        _ => idx as u64,
    };

    let properties = feature.properties.unwrap_or_default();

    Some(PointFeature::new(FeatureId(id), position, properties))
}

fn type_name(geojson: &geojson::GeoJson) -> &'static str {
    match geojson {
        geojson::GeoJson::FeatureCollection(_) => "FeatureCollection",
        geojson::GeoJson::Feature(_) => "Feature",
        geojson::GeoJson::Geometry(_) => "Geometry",
    }
}
