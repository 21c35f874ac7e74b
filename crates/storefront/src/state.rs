//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{CommerceServices, ContentRepository};
use crate::site::SiteContext;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the site link builder and the service collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    site: SiteContext,
    commerce: Box<dyn CommerceServices>,
    content: Box<dyn ContentRepository>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `commerce` - Commerce service layer
    /// * `content` - Content item repository
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        commerce: impl CommerceServices + 'static,
        content: impl ContentRepository + 'static,
    ) -> Self {
        let site = SiteContext::from_config(&config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                site,
                commerce: Box::new(commerce),
                content: Box::new(content),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the link builder for the storefront site.
    #[must_use]
    pub fn site(&self) -> &SiteContext {
        &self.inner.site
    }

    /// Get the commerce service layer.
    #[must_use]
    pub fn commerce(&self) -> &dyn CommerceServices {
        self.inner.commerce.as_ref()
    }

    /// Get the content item repository.
    #[must_use]
    pub fn content(&self) -> &dyn ContentRepository {
        self.inner.content.as_ref()
    }
}
