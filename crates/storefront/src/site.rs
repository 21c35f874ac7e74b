//! Storefront link building.

use crate::config::StorefrontConfig;

/// Builds links to storefront pages.
pub trait StorefrontUri {
    /// Link to `path` on the current storefront site.
    fn storefront_uri(&self, path: &str) -> String;
}

/// The storefront site a request is served for.
///
/// An empty base URL produces site-relative links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    base_url: String,
}

impl SiteContext {
    /// Create a site context for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed);
        Self { base_url }
    }

    /// Create a site context from the storefront configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.base_url.as_str())
    }

    /// The base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl StorefrontUri for SiteContext {
    fn storefront_uri(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_base_and_path() {
        let site = SiteContext::new("https://shop.example.com");
        assert_eq!(
            site.storefront_uri("/accountmanagement/addressbook"),
            "https://shop.example.com/accountmanagement/addressbook"
        );
    }

    #[test]
    fn test_trailing_and_missing_slashes() {
        let site = SiteContext::new("https://shop.example.com/");
        assert_eq!(site.base_url(), "https://shop.example.com");
        assert_eq!(
            site.storefront_uri("cart"),
            "https://shop.example.com/cart"
        );
    }

    #[test]
    fn test_empty_base_is_site_relative() {
        let site = SiteContext::default();
        assert_eq!(site.storefront_uri("/cart"), "/cart");
        assert_eq!(site.storefront_uri(""), "/");
    }

    #[test]
    fn test_base_with_site_prefix() {
        let site = SiteContext::new("https://example.com/en-gb");
        assert_eq!(
            site.storefront_uri("/accountmanagement/addressbook"),
            "https://example.com/en-gb/accountmanagement/addressbook"
        );
    }
}
