//! Component fragment route handlers.

use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::models::view_models::NoDataSourceViewModel;
use crate::state::AppState;

/// Render the placeholder shown by components without a data source.
#[instrument(skip(state))]
pub async fn no_datasource(State(state): State<AppState>) -> Result<NoDataSourceViewModel> {
    let path = &state.config().no_datasource_item;
    let item = state.content().item(path);
    if item.is_none() {
        tracing::warn!(item = %path, "No data source content item is missing");
    }

    Ok(NoDataSourceViewModel::try_new(item.as_ref())?)
}
