//! Collaborators the storefront reads entities from.
//!
//! # Services
//!
//! - [`CommerceServices`] - Customer parties, loyalty cards and stock
//!   information from the commerce platform
//! - [`ContentRepository`] - Content items from the CMS
//!
//! Both are owned by other subsystems; the storefront only consumes them.
//! [`memory`] provides in-process implementations for tests and local runs.

pub mod memory;

use reference_storefront_core::{
    ContentItem, LoyaltyCard, Party, ServiceResponse, StockInformation,
};

pub use memory::{InMemoryCommerce, InMemoryContent};

/// The commerce service layer.
///
/// Every call reports its status in the returned [`ServiceResponse`];
/// failures are not raised as errors.
pub trait CommerceServices: Send + Sync {
    /// Parties in the customer's address book.
    fn customer_parties(&self, customer_id: &str) -> ServiceResponse<Vec<Party>>;

    /// Loyalty cards held by the customer.
    fn loyalty_cards(&self, customer_id: &str) -> ServiceResponse<Vec<LoyaltyCard>>;

    /// Stock information for the given products, in request order.
    fn stock_information(&self, product_ids: &[String]) -> ServiceResponse<Vec<StockInformation>>;
}

/// Content item lookup.
pub trait ContentRepository: Send + Sync {
    /// The item at `path`, if it exists.
    fn item(&self, path: &str) -> Option<ContentItem>;
}
