use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeovistaError, Result};

/// Default attribute for heatmap intensity, matching the source dataset
pub const DEFAULT_INTENSITY_FIELD: &str = "Superficie total afectada (%)";

/// Viewer configuration: where the dataset lives and which attribute drives
/// the heatmap. Heatmap visual constants are fixed and deliberately absent
/// here; see `HeatmapSettings` in the view crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Path of the GeoJSON dataset, fetched once at startup
    pub dataset_path: PathBuf,

    /// Percentage-valued attribute read by the intensity mapper
    pub intensity_field: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("puntos.geojson"),
            intensity_field: DEFAULT_INTENSITY_FIELD.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a TOML file, with defaults for absent keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| GeovistaError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeovistaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        let mut config = Self::default();
        if let Some(dataset_path) = file_config.dataset_path {
            config.dataset_path = dataset_path;
        }
        if let Some(intensity_field) = file_config.intensity_field {
            if intensity_field.is_empty() {
                tracing::warn!("Ignoring empty intensity_field in config file");
            } else {
                config.intensity_field = intensity_field;
            }
        }

        Ok(config)
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    dataset_path: Option<PathBuf>,
    intensity_field: Option<String>,
}
