//! Inventory stock results.

use reference_storefront_core::{ServiceProviderResult, StockInformation, StockStatus};
use serde::Serialize;

use super::base::BaseJsonResult;
use crate::models::mapping::{Initialize, map_each};
use crate::site::StorefrontUri;

/// Stock information for one product or variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockInfoResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub location: String,
    pub status: String,
    pub count: f64,
    pub availability_date: Option<String>,
    pub can_show_signup_for_notification: bool,
}

impl Initialize<StockInformation> for StockInfoResult {
    const ARGUMENT: &'static str = "stockInfo";

    fn initialize(&mut self, info: &StockInformation, _site: &dyn StorefrontUri) {
        self.product_id.clone_from(&info.product.product_id);
        self.variant_id.clone_from(&info.product.variant_id);
        self.location.clone_from(&info.location);
        self.status = info.status.display_name().to_string();
        self.count = info.count;
        self.availability_date = info
            .availability_date
            .map(|date| date.format("%Y-%m-%d").to_string());
        self.can_show_signup_for_notification = info.status == StockStatus::OutOfStock;
    }
}

/// Stock information for a set of products, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockInfoListResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub stock_informations: Vec<StockInfoResult>,
}

impl StockInfoListResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result carrying the status of a service call.
    #[must_use]
    pub fn with_status(result: &ServiceProviderResult) -> Self {
        Self {
            base: BaseJsonResult::from_service_result(result),
            stock_informations: Vec::new(),
        }
    }
}

impl Initialize<[StockInformation]> for StockInfoListResult {
    const ARGUMENT: &'static str = "stockInformations";

    fn initialize(&mut self, infos: &[StockInformation], site: &dyn StorefrontUri) {
        self.stock_informations.clear();
        if infos.is_empty() {
            return;
        }

        self.stock_informations.extend(map_each(infos, site));
    }
}
