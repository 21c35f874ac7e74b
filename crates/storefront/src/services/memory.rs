//! In-process service implementations.

use std::collections::HashMap;

use reference_storefront_core::{
    ContentItem, LoyaltyCard, Party, ServiceProviderResult, ServiceResponse, StockInformation,
};

use super::{CommerceServices, ContentRepository};

/// Commerce services backed by in-memory data.
///
/// Unknown customers have an empty address book and no loyalty cards. A
/// configured failure is returned by every call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommerce {
    parties: HashMap<String, Vec<Party>>,
    loyalty_cards: HashMap<String, Vec<LoyaltyCard>>,
    stock: Vec<StockInformation>,
    failure: Option<ServiceProviderResult>,
}

impl InMemoryCommerce {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a party to a customer's address book.
    #[must_use]
    pub fn with_party(mut self, customer_id: impl Into<String>, party: Party) -> Self {
        self.parties.entry(customer_id.into()).or_default().push(party);
        self
    }

    /// Add a loyalty card to a customer.
    #[must_use]
    pub fn with_loyalty_card(mut self, customer_id: impl Into<String>, card: LoyaltyCard) -> Self {
        self.loyalty_cards
            .entry(customer_id.into())
            .or_default()
            .push(card);
        self
    }

    /// Add a stock record.
    #[must_use]
    pub fn with_stock(mut self, info: StockInformation) -> Self {
        self.stock.push(info);
        self
    }

    /// Make every call fail with `status`.
    #[must_use]
    pub fn failing_with(mut self, status: ServiceProviderResult) -> Self {
        self.failure = Some(status);
        self
    }

    fn respond<T>(&self, payload: impl FnOnce() -> T) -> ServiceResponse<T> {
        match &self.failure {
            Some(status) => ServiceResponse::failed(status.clone()),
            None => ServiceResponse::ok(payload()),
        }
    }
}

impl CommerceServices for InMemoryCommerce {
    fn customer_parties(&self, customer_id: &str) -> ServiceResponse<Vec<Party>> {
        self.respond(|| self.parties.get(customer_id).cloned().unwrap_or_default())
    }

    fn loyalty_cards(&self, customer_id: &str) -> ServiceResponse<Vec<LoyaltyCard>> {
        self.respond(|| {
            self.loyalty_cards
                .get(customer_id)
                .cloned()
                .unwrap_or_default()
        })
    }

    fn stock_information(&self, product_ids: &[String]) -> ServiceResponse<Vec<StockInformation>> {
        self.respond(|| {
            product_ids
                .iter()
                .flat_map(|id| {
                    self.stock
                        .iter()
                        .filter(move |info| &info.product.product_id == id)
                        .cloned()
                })
                .collect()
        })
    }
}

/// Content repository backed by in-memory items keyed by path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    items: HashMap<String, ContentItem>,
}

impl InMemoryContent {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `item` at `path`.
    #[must_use]
    pub fn with_item(mut self, path: impl Into<String>, item: ContentItem) -> Self {
        self.items.insert(path.into(), item);
        self
    }
}

impl ContentRepository for InMemoryContent {
    fn item(&self, path: &str) -> Option<ContentItem> {
        self.items.get(path).cloned()
    }
}
