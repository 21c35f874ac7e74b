//! Customer account route handlers.
//!
//! Each handler asks the commerce service for entities, carries the service
//! status into the result and maps the payload only when the call succeeded.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::Initialize;
use crate::models::json_results::{AddressItemResult, AddressListResult, LoyaltyCardsResult};
use crate::state::AppState;

/// Path parameters for a single address.
#[derive(Debug, Deserialize)]
pub struct AddressPath {
    pub customer_id: String,
    pub external_id: String,
}

/// Return the customer's address book.
#[instrument(skip_all, fields(customer_id = %customer_id))]
pub async fn addresses(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<AddressListResult>> {
    let response = state.commerce().customer_parties(&customer_id);
    let mut result = AddressListResult::with_status(&response.status);

    if response.status.success {
        result.try_initialize(response.payload.as_deref(), state.site())?;
    } else {
        tracing::debug!(errors = ?result.base.errors, "Address book lookup failed");
    }

    Ok(Json(result))
}

/// Return a single address from the customer's address book.
#[instrument(
    skip_all,
    fields(customer_id = %path.customer_id, external_id = %path.external_id)
)]
pub async fn address(
    State(state): State<AppState>,
    Path(path): Path<AddressPath>,
) -> Result<Json<AddressItemResult>> {
    let response = state.commerce().customer_parties(&path.customer_id);
    let mut result = AddressItemResult::with_status(&response.status);

    if !response.status.success {
        tracing::debug!(errors = ?result.base.errors, "Address lookup failed");
        return Ok(Json(result));
    }

    let parties = response.payload.unwrap_or_default();
    let party = parties
        .iter()
        .find(|party| party.external_id == path.external_id)
        .ok_or_else(|| AppError::NotFound(format!("address {}", path.external_id)))?;

    result.initialize(party, state.site());
    Ok(Json(result))
}

/// Return the customer's loyalty cards.
#[instrument(skip_all, fields(customer_id = %customer_id))]
pub async fn loyalty_cards(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<LoyaltyCardsResult>> {
    let response = state.commerce().loyalty_cards(&customer_id);
    let mut result = LoyaltyCardsResult::with_status(&response.status);

    if response.status.success {
        result.try_initialize(response.payload.as_deref(), state.site())?;
    } else {
        tracing::debug!(errors = ?result.base.errors, "Loyalty card lookup failed");
    }

    Ok(Json(result))
}
