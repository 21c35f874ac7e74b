//! Inventory route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::Initialize;
use crate::models::json_results::StockInfoListResult;
use crate::state::AppState;

/// Stock query parameters.
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    /// Comma-separated product IDs.
    #[serde(rename = "productIds", default)]
    pub product_ids: String,
}

impl StockQuery {
    /// Product IDs in request order, skipping blanks.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.product_ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Return stock information for the requested products.
#[instrument(skip(state))]
pub async fn stock(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> Result<Json<StockInfoListResult>> {
    let product_ids = query.ids();
    if product_ids.is_empty() {
        return Err(AppError::BadRequest("productIds is required".to_string()));
    }

    let response = state.commerce().stock_information(&product_ids);
    let mut result = StockInfoListResult::with_status(&response.status);

    if response.status.success {
        result.try_initialize(response.payload.as_deref(), state.site())?;
    } else {
        tracing::debug!(errors = ?result.base.errors, "Stock lookup failed");
    }

    Ok(Json(result))
}
