//! geovista core - dataset model, loading, schema derivation, and filtering
//!
//! This crate contains the domain logic of the viewer: everything that can
//! be computed from the loaded dataset without touching a map surface.

pub mod config;
pub mod error;
pub mod formats;
pub mod heat;
pub mod models;
pub mod query;

pub use error::{GeovistaError, Result};
