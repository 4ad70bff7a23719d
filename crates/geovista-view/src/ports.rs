//! The map surface port
//!
//! The actual basemap, marker clustering, and heat rendering live outside
//! this crate. The viewer core only ever talks to them through `MapSurface`,
//! and everything here is synchronous: after the initial dataset load the
//! whole viewer runs on one UI thread.

use serde::{Deserialize, Serialize};

use geovista_core::models::{FeatureId, Position};

/// One marker on the point layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    /// Feature this marker represents
    pub feature_id: FeatureId,

    /// Marker location
    pub position: Position,

    /// Popup content: one "key: value" line per attribute, wrapped in a
    /// scrollable fixed-height container
    pub popup_html: String,
}

/// One weighted point on the heat layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeatPoint {
    pub position: Position,

    /// Normalized weight in `[0, 1]`
    pub intensity: f64,
}

/// Fixed visual configuration of the heat layer. These values are part of
/// the viewer's look and are not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSettings {
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u8,
    pub min_opacity: f64,
}

impl Default for HeatmapSettings {
    fn default() -> Self {
        Self {
            radius: 30,
            blur: 20,
            max_zoom: 13,
            min_opacity: 0.35,
        }
    }
}

/// Port for the external map renderer.
///
/// The render coordinator always clears a layer before repopulating it, so
/// an implementation never has to deduplicate.
pub trait MapSurface: Send {
    /// Remove every marker from the point layer
    fn clear_markers(&mut self);

    /// Add one marker to the point layer
    fn add_marker(&mut self, marker: Marker);

    /// Remove the heat layer and its overlay-control entry, if present
    fn remove_heat_layer(&mut self);

    /// Install a new heat layer and register it under `overlay_name`
    fn set_heat_layer(
        &mut self,
        points: Vec<HeatPoint>,
        settings: &HeatmapSettings,
        overlay_name: &str,
    );

    /// Update the visible-feature counter display
    fn set_counter(&mut self, shown: usize);
}
