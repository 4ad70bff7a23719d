//! In-memory map surface for tests and headless embedding
//!
//! Records exactly what a real surface would be told to draw, so tests can
//! assert on layer contents, overlay registration, and the counter without
//! a browser runtime.

use crate::ports::{HeatPoint, HeatmapSettings, MapSurface, Marker};

/// Recording implementation of `MapSurface`
#[derive(Debug, Default)]
pub struct MemorySurface {
    markers: Vec<Marker>,
    heat_layer: Option<RecordedHeatLayer>,
    counter: usize,
}

/// Heat layer as last installed on the surface
#[derive(Debug, Clone)]
pub struct RecordedHeatLayer {
    pub points: Vec<HeatPoint>,
    pub settings: HeatmapSettings,
    pub overlay_name: String,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers currently on the point layer
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The installed heat layer, if any
    pub fn heat_layer(&self) -> Option<&RecordedHeatLayer> {
        self.heat_layer.as_ref()
    }

    /// Last counter value shown
    pub fn counter(&self) -> usize {
        self.counter
    }
}

impl MapSurface for MemorySurface {
    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn remove_heat_layer(&mut self) {
        self.heat_layer = None;
    }

    fn set_heat_layer(
        &mut self,
        points: Vec<HeatPoint>,
        settings: &HeatmapSettings,
        overlay_name: &str,
    ) {
        self.heat_layer = Some(RecordedHeatLayer {
            points,
            settings: *settings,
            overlay_name: overlay_name.to_string(),
        });
    }

    fn set_counter(&mut self, shown: usize) {
        self.counter = shown;
    }
}
