//! Core types for the Reference Storefront.
//!
//! This module provides the commerce entities consumed by the storefront.

pub mod content;
pub mod inventory;
pub mod loyalty;
pub mod party;
pub mod service;
pub mod status;

pub use content::ContentItem;
pub use inventory::{InventoryProduct, StockInformation};
pub use loyalty::{LoyaltyCard, LoyaltyRewardPoint};
pub use party::Party;
pub use service::{ServiceProviderResult, ServiceResponse, SystemMessage};
pub use status::*;
