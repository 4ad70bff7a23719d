//! The render coordinator: drives the map surface from a feature subset

use geovista_core::heat::IntensityMapper;
use geovista_core::models::feature::value_text;
use geovista_core::models::PointFeature;

use crate::ports::{HeatPoint, HeatmapSettings, MapSurface, Marker};

/// Overlay-control label of the heat layer
pub const HEAT_OVERLAY_NAME: &str = "Mapa de calor (%)";

/// Popup heading shown above the attribute listing
pub const POPUP_TITLE: &str = "Información del predio";

/// Rebuilds the point layer, the heat layer, and the counter from a
/// feature subset.
#[derive(Debug, Clone)]
pub struct RenderCoordinator {
    intensity: IntensityMapper,
    heat_settings: HeatmapSettings,
}

impl RenderCoordinator {
    pub fn new(intensity: IntensityMapper) -> Self {
        Self { intensity, heat_settings: HeatmapSettings::default() }
    }

    /// Replace everything the surface currently shows with `features`.
    ///
    /// Each layer is cleared before it is repopulated, so calling this twice
    /// with the same subset leaves exactly one marker and one heat point per
    /// feature. The counter always moves together with the layers.
    pub fn render(&self, surface: &mut dyn MapSurface, features: &[PointFeature]) {
        surface.clear_markers();
        for feature in features {
            surface.add_marker(Marker {
                feature_id: feature.id,
                position: feature.position,
                popup_html: build_popup(feature),
            });
        }

        let heat_points = features
            .iter()
            .map(|feature| HeatPoint {
                position: feature.position,
                intensity: self.intensity.intensity(feature),
            })
            .collect();

        surface.remove_heat_layer();
        surface.set_heat_layer(heat_points, &self.heat_settings, HEAT_OVERLAY_NAME);

        surface.set_counter(features.len());

        tracing::debug!(shown = features.len(), "Rendered feature subset");
    }
}

/// Popup markup for one feature: every attribute as a "key: value" line in
/// natural enumeration order, inside a scrollable fixed-height container.
pub fn build_popup(feature: &PointFeature) -> String {
    let mut popup =
        String::from("<div style='max-height:300px; overflow-y:auto; font-size:13px'>");
    popup.push_str(&format!("<b>{}</b><br><br>", POPUP_TITLE));

    for (key, value) in &feature.properties {
        popup.push_str(&format!("<b>{}:</b> {}<br>", key, value_text(value)));
    }

    popup.push_str("</div>");
    popup
}
