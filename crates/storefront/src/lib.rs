//! Reference Storefront library.
//!
//! Presentation-layer results for the storefront: commerce entities from the
//! service layer are mapped into flat JSON results and view models that
//! browser scripts and component views consume.
//!
//! # Modules
//!
//! - [`models`] - JSON results, view models and the mapping contract
//! - [`site`] - Storefront link building
//! - [`services`] - Commerce and content collaborators
//! - [`routes`] - Axum handlers returning the results
//! - [`config`] - Configuration loaded from the environment
//! - [`error`] - Unified application error

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod site;
pub mod state;
