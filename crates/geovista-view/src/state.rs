//! Viewer state and event handling
//!
//! All UI callbacks funnel into `ViewerState::apply`, a pure transition
//! from (state, event) to render instructions. Nothing here touches the
//! map surface; the `Viewer` wiring executes the returned `Transition`.

use geovista_core::models::{FilterCriteria, PointDataset, PointFeature};
use geovista_core::query::{apply_filters, distinct_values};

/// Discrete UI actions the viewer reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The free-text search input changed
    SearchChanged(String),

    /// A field was picked in the field selector; `None` means the blank
    /// "choose a field" entry
    FieldChanged(Option<String>),

    /// A value was picked in the value selector; `None` means the "(all)"
    /// sentinel
    ValueChanged(Option<String>),

    /// The reset action clears every constraint
    Reset,

    /// Collapse or expand the filter panel
    TogglePanel,
}

/// What the UI must do after an event was applied
#[derive(Debug, Clone, Default)]
pub struct Transition {
    /// New options for the value selector, when the field selection changed.
    /// The "(all)" sentinel is the UI's own first entry and not included.
    pub value_options: Option<Vec<String>>,

    /// Feature subset to re-render, when the visible set changed
    pub subset: Option<Vec<PointFeature>>,

    /// New collapse state of the filter panel, when toggled
    pub panel_collapsed: Option<bool>,
}

/// The whole application state: the immutable dataset plus the current
/// filter constraints and panel flag. Created once on load success.
#[derive(Debug, Clone)]
pub struct ViewerState {
    dataset: PointDataset,
    criteria: FilterCriteria,
    panel_collapsed: bool,
}

impl ViewerState {
    pub fn new(dataset: PointDataset) -> Self {
        Self {
            dataset,
            criteria: FilterCriteria::none(),
            panel_collapsed: false,
        }
    }

    pub fn dataset(&self) -> &PointDataset {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    /// The subset selected by the current criteria
    pub fn current_subset(&self) -> Vec<PointFeature> {
        apply_filters(&self.dataset.features, &self.criteria)
    }

    /// Apply one UI event and report what the UI must do next.
    ///
    /// Changing the field repopulates the value selector and drops the value
    /// constraint but does not re-render on its own; the visible set only
    /// moves on search, value, and reset events. That matches the original
    /// viewer's event wiring.
    pub fn apply(&mut self, event: ViewerEvent) -> Transition {
        match event {
            ViewerEvent::SearchChanged(text) => {
                self.criteria.free_text = text;
                Transition {
                    subset: Some(self.current_subset()),
                    ..Transition::default()
                }
            }
            ViewerEvent::FieldChanged(field) => {
                let value_options = field
                    .as_deref()
                    .map(|f| distinct_values(&self.dataset, f))
                    .unwrap_or_default();
                self.criteria.field = field;
                self.criteria.value = None;
                Transition {
                    value_options: Some(value_options),
                    ..Transition::default()
                }
            }
            ViewerEvent::ValueChanged(value) => {
                self.criteria.value = value;
                Transition {
                    subset: Some(self.current_subset()),
                    ..Transition::default()
                }
            }
            ViewerEvent::Reset => {
                self.criteria = FilterCriteria::none();
                Transition {
                    value_options: Some(Vec::new()),
                    subset: Some(self.dataset.features.clone()),
                    ..Transition::default()
                }
            }
            ViewerEvent::TogglePanel => {
                self.panel_collapsed = !self.panel_collapsed;
                Transition {
                    panel_collapsed: Some(self.panel_collapsed),
                    ..Transition::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use geovista_core::models::{DatasetInfo, FeatureId, Position};
    use serde_json::{json, Map, Value};
    use std::path::PathBuf;

    fn dataset() -> PointDataset {
        let rows: Vec<Vec<(&str, Value)>> = vec![
            vec![("Nombre", json!("El Roble")), ("Tipo", json!("A"))],
            vec![("Nombre", json!("Los Alerces")), ("Tipo", json!("B"))],
            vec![("Nombre", json!("Roble Viejo")), ("Tipo", json!("A"))],
        ];
        let features = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let mut props = Map::new();
                for (key, value) in row {
                    props.insert(key.to_string(), value);
                }
                geovista_core::models::PointFeature::new(
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
    fn test_search_changed_rerenders() {
        let mut state = ViewerState::new(dataset());
        let transition = state.apply(ViewerEvent::SearchChanged("roble".to_string()));

        let subset = transition.subset.expect("search must re-render");
        assert_eq!(subset.len(), 2);
        assert!(transition.value_options.is_none());
    }

    #[test]
    fn test_field_changed_repopulates_values_without_render() {
        let mut state = ViewerState::new(dataset());
        let transition = state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));

        assert_eq!(transition.value_options, Some(vec!["A".to_string(), "B".to_string()]));
        assert!(transition.subset.is_none());
        assert_eq!(state.criteria().value, None);
    }

    #[test]
    fn test_field_cleared_empties_value_options() {
        let mut state = ViewerState::new(dataset());
        state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));
        let transition = state.apply(ViewerEvent::FieldChanged(None));

        assert_eq!(transition.value_options, Some(Vec::new()));
        assert_eq!(state.criteria().field, None);
    }

    #[test]
    fn test_value_changed_applies_equality_constraint() {
        let mut state = ViewerState::new(dataset());
        state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));
        let transition = state.apply(ViewerEvent::ValueChanged(Some("A".to_string())));

        let subset = transition.subset.expect("value change must re-render");
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|f| f.property_text("Tipo") == "A"));
    }

    #[test]
    fn test_value_all_sentinel_lifts_constraint() {
        let mut state = ViewerState::new(dataset());
        state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));
        state.apply(ViewerEvent::ValueChanged(Some("A".to_string())));
        let transition = state.apply(ViewerEvent::ValueChanged(None));

        assert_eq!(transition.subset.expect("must re-render").len(), 3);
    }

    #[test]
    fn test_stale_field_constraint_survives_field_change() {
        // Changing the field clears the value constraint but does not
        // re-render; the previously filtered subset stays visible until the
        // next search/value/reset event. Original viewer behavior.
        let mut state = ViewerState::new(dataset());
        state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));
        state.apply(ViewerEvent::ValueChanged(Some("A".to_string())));

        let transition = state.apply(ViewerEvent::FieldChanged(Some("Nombre".to_string())));
        assert!(transition.subset.is_none());
        // But the criteria no longer constrain by value
        assert_eq!(state.current_subset().len(), 3);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = ViewerState::new(dataset());
        state.apply(ViewerEvent::SearchChanged("roble".to_string()));
        state.apply(ViewerEvent::FieldChanged(Some("Tipo".to_string())));
        state.apply(ViewerEvent::ValueChanged(Some("A".to_string())));

        let transition = state.apply(ViewerEvent::Reset);
        assert_eq!(transition.subset.expect("reset must re-render").len(), 3);
        assert_eq!(transition.value_options, Some(Vec::new()));
        assert!(state.criteria().is_none());
    }

    #[test]
    fn test_toggle_panel_only_flips_flag() {
        let mut state = ViewerState::new(dataset());
        assert!(!state.panel_collapsed());

        let transition = state.apply(ViewerEvent::TogglePanel);
        assert_eq!(transition.panel_collapsed, Some(true));
        assert!(transition.subset.is_none());
        assert!(transition.value_options.is_none());

        let transition = state.apply(ViewerEvent::TogglePanel);
        assert_eq!(transition.panel_collapsed, Some(false));
    }
}
