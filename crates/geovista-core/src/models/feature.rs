use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique identifier for a point feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub u64);

/// Geographic position in WGS84 (EPSG:4326)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// One geographic record: a point location plus named attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointFeature {
    /// Unique identifier
    pub id: FeatureId,

    /// Point location
    pub position: Position,

    /// Attribute map, in the dataset's natural enumeration order
    pub properties: Map<String, Value>,
}

impl PointFeature {
    /// Create a new feature
    pub fn new(id: FeatureId, position: Position, properties: Map<String, Value>) -> Self {
        Self { id, position, properties }
    }

    /// Stringified value of one attribute.
    ///
    /// Follows the display convention of the dataset's original browser
    /// viewer: a null value renders as the literal `"null"` and an absent
    /// key as the literal `"undefined"`. Filtering and popups both rely on
    /// this, so it must not be "improved" to an empty string.
    pub fn property_text(&self, field: &str) -> String {
        match self.properties.get(field) {
            Some(value) => value_text(value),
            None => "undefined".to_string(),
        }
    }
}

/// Stringify one attribute value: strings come through unquoted, null is the
/// literal `"null"`, numbers and booleans use their JSON rendering.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
