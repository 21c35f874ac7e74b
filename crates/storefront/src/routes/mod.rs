//! HTTP route handlers for storefront JSON results.
//!
//! # Route Structure
//!
//! ```text
//! # Account (JSON)
//! GET  /api/customers/{customer_id}/addresses                 - Address book
//! GET  /api/customers/{customer_id}/addresses/{external_id}   - Single address
//! GET  /api/customers/{customer_id}/loyalty-cards             - Loyalty cards
//!
//! # Inventory (JSON)
//! GET  /api/inventory/stock?productIds=a,b                    - Stock information
//!
//! # Components (HTML fragments)
//! GET  /components/no-datasource                              - Placeholder message
//! ```
//!
//! Service failures are reported inside the result envelope (`Success`,
//! `Errors`) with a 200 status; only local failures use error statuses.

pub mod account;
pub mod components;
pub mod inventory;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the customer account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/addresses", get(account::addresses))
        .route("/addresses/{external_id}", get(account::address))
        .route("/loyalty-cards", get(account::loyalty_cards))
}

/// Create the inventory routes router.
pub fn inventory_routes() -> Router<AppState> {
    Router::new().route("/stock", get(inventory::stock))
}

/// Create the component fragment routes router.
pub fn component_routes() -> Router<AppState> {
    Router::new().route("/no-datasource", get(components::no_datasource))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/customers/{customer_id}", account_routes())
        .nest("/api/inventory", inventory_routes())
        .nest("/components", component_routes())
}

/// Build the application with request tracing and shared state applied.
pub fn app(state: AppState) -> Router {
    routes().layer(TraceLayer::new_for_http()).with_state(state)
}
