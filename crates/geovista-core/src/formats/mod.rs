//! Dataset readers
//!
//! One reader runs once at startup; everything downstream of the load is
//! synchronous. There is no retry: the dataset is static and trusted, and a
//! failed load leaves the viewer unusable but intact.

pub mod geojson;

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::models::PointDataset;

pub use geojson::GeoJsonReader;

/// Port for loading a point dataset from a file
#[async_trait]
pub trait DatasetReader: Send + Sync {
    /// Read and parse the dataset at `path`
    async fn read(&self, path: &Path) -> Result<PointDataset>;

    /// File extensions this reader handles
    fn supported_extensions(&self) -> &[&str];

    /// Human-readable format name
    fn format_name(&self) -> &str;
}
