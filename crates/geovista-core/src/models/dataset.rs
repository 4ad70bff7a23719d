use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::feature::PointFeature;

/// Dataset metadata without the feature payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name (file stem of the source)
    pub name: String,

    /// Path the dataset was loaded from
    pub path: PathBuf,

    /// Number of point features
    pub feature_count: usize,

    /// When the dataset was loaded
    pub loaded_at: DateTime<Utc>,
}

/// The full ordered collection of point features, loaded once at startup
/// and never mutated. Every derived view (field catalog, distinct values,
/// filtered subsets) is computed from this single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointDataset {
    /// Dataset metadata
    pub info: DatasetInfo,

    /// Features in source order
    pub features: Vec<PointFeature>,
}

impl PointDataset {
    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the dataset holds no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
