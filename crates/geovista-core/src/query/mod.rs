//! Derived views over the loaded dataset: schema enumeration and filtering

pub mod filter;
pub mod schema;

pub use filter::apply_filters;
pub use schema::{distinct_values, field_catalog};
