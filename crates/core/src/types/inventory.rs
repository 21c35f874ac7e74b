//! Inventory entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::StockStatus;

/// The product a stock record refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryProduct {
    /// Product identifier.
    pub product_id: String,
    /// Variant identifier, when the record is for a single variant.
    pub variant_id: Option<String>,
    /// Catalog the product belongs to.
    pub catalog_name: String,
}

/// Stock information for one product or variant at one location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockInformation {
    /// The product this record describes.
    pub product: InventoryProduct,
    /// Inventory location (warehouse or store) name.
    pub location: String,
    /// Current stock status.
    pub status: StockStatus,
    /// Units on hand.
    pub count: f64,
    /// When the item becomes available again (pre-order/back-order).
    pub availability_date: Option<DateTime<Utc>>,
}
