//! Presentation models for the storefront.
//!
//! - [`json_results`] - Results returned to browser scripts as JSON, built
//!   from commerce service entities
//! - [`view_models`] - Presentation-only models built from content items
//! - [`mapping`] - The entity-to-result mapping contract shared by all results

pub mod json_results;
pub mod mapping;
pub mod view_models;

pub use mapping::{Initialize, MappingError};
