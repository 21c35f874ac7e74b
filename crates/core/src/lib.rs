//! Reference Storefront Core - Commerce domain entities.
//!
//! This crate provides the entities the storefront reads from the commerce
//! service layer:
//! - parties (customer addresses)
//! - loyalty cards and their reward points
//! - stock information for products and variants
//! - content items from the CMS
//! - the success/error envelope returned by every service call
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no service clients, no HTTP.
//! Presentation-layer results in the `reference-storefront` crate read these
//! entities and never write back to them.
//!
//! # Modules
//!
//! - [`types`] - Entity structs, the stock status enum and service envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
