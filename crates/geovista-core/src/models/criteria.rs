use serde::{Deserialize, Serialize};

/// The active filter constraints.
///
/// Both constraints are optional and combine with AND semantics. An empty
/// `free_text` and an unset field/value pair mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against every attribute value
    pub free_text: String,

    /// Attribute name for the equality constraint
    pub field: Option<String>,

    /// Required stringified value of `field`
    pub value: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no constraints; filtering with it is the identity
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the free-text constraint is active
    pub fn has_text(&self) -> bool {
        !self.free_text.is_empty()
    }

    /// Whether the field/value equality constraint is active.
    ///
    /// Both halves must be set: a field with the "(all)" sentinel value
    /// selected constrains nothing.
    pub fn has_field_value(&self) -> bool {
        matches!((&self.field, &self.value), (Some(f), Some(v)) if !f.is_empty() && !v.is_empty())
    }

    /// Whether no constraint is active
    pub fn is_none(&self) -> bool {
        !self.has_text() && !self.has_field_value()
    }
}
