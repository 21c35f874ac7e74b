//! Integration tests for the Reference Storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p reference-storefront-integration-tests
//! ```
//!
//! The storefront router runs in-process against in-memory commerce and
//! content services, so no external systems are needed.
//!
//! # Test Categories
//!
//! - `account` - Address book and loyalty card results
//! - `inventory` - Stock information results
//! - `components` - Component view models

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use reference_storefront::{
    config::StorefrontConfig,
    routes,
    services::{InMemoryCommerce, InMemoryContent},
    state::AppState,
};
use reference_storefront_core::{ContentItem, Party};
use serde_json::Value;
use tower::ServiceExt;

/// Base URL every test storefront is configured with.
pub const BASE_URL: &str = "https://shop.example.com";

/// Customer with a populated address book.
pub const CUSTOMER_ID: &str = "C-1001";

/// A storefront router wired to in-memory services.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context for the given services.
    #[must_use]
    pub fn new(commerce: InMemoryCommerce, content: InMemoryContent) -> Self {
        let config = StorefrontConfig {
            base_url: BASE_URL.to_string(),
            no_datasource_item: reference_storefront::config::DEFAULT_NO_DATASOURCE_ITEM
                .to_string(),
        };
        let state = AppState::new(config, commerce, content);

        Self {
            app: routes::app(state),
        }
    }

    /// Create a context with only commerce data.
    #[must_use]
    pub fn with_commerce(commerce: InMemoryCommerce) -> Self {
        Self::new(commerce, InMemoryContent::new())
    }

    /// Issue a GET request and return the status and raw body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    #[allow(clippy::unwrap_used)]
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Issue a GET request and parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[allow(clippy::unwrap_used)]
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}

/// A party with the given external ID and street line.
#[must_use]
pub fn party(external_id: &str, address1: &str, city: &str, zip: &str) -> Party {
    Party {
        external_id: external_id.to_string(),
        address1: address1.to_string(),
        city: city.to_string(),
        zip_postal_code: zip.to_string(),
        ..Party::default()
    }
}

/// The "no data source" content item with the given text.
#[must_use]
pub fn no_datasource_item(text: &str) -> ContentItem {
    ContentItem::new(reference_storefront::config::DEFAULT_NO_DATASOURCE_ITEM)
        .with_field("Text", text)
}
