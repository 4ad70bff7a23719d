//! Viewer wiring: ties loading, state, and rendering together

use geovista_core::config::ViewerConfig;
use geovista_core::formats::{DatasetReader, GeoJsonReader};
use geovista_core::heat::IntensityMapper;
use geovista_core::query::field_catalog;
use geovista_core::Result;

use crate::ports::MapSurface;
use crate::render::RenderCoordinator;
use crate::state::{Transition, ViewerEvent, ViewerState};

/// A loaded viewer bound to one map surface.
///
/// `open` performs the single asynchronous step of the whole program, the
/// dataset load. Everything after it is synchronous: each dispatched event
/// runs one full recomputation and redraw, with no debouncing.
pub struct Viewer<S: MapSurface> {
    state: ViewerState,
    renderer: RenderCoordinator,
    surface: S,
}

impl<S: MapSurface> Viewer<S> {
    /// Load the dataset named by `config`, render the full collection, and
    /// return the ready viewer. There is no retry; a load failure is final.
    pub async fn open(config: &ViewerConfig, surface: S) -> Result<Self> {
        let dataset = GeoJsonReader.read(&config.dataset_path).await?;
        tracing::info!(
            name = %dataset.info.name,
            features = dataset.len(),
            "Dataset loaded"
        );

        let renderer =
            RenderCoordinator::new(IntensityMapper::new(config.intensity_field.clone()));
        let mut viewer = Self {
            state: ViewerState::new(dataset),
            renderer,
            surface,
        };

        let all = viewer.state.dataset().features.clone();
        viewer.renderer.render(&mut viewer.surface, &all);
        Ok(viewer)
    }

    /// Attribute names for the field selector, from the dataset schema
    pub fn field_catalog(&self) -> Result<Vec<String>> {
        field_catalog(self.state.dataset())
    }

    /// Apply one UI event; if it changed the visible set, redraw the
    /// surface. The returned transition also carries any value-selector
    /// repopulation and panel change for the embedding UI.
    pub fn dispatch(&mut self, event: ViewerEvent) -> Transition {
        let transition = self.state.apply(event);
        if let Some(subset) = &transition.subset {
            self.renderer.render(&mut self.surface, subset);
        }
        transition
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
