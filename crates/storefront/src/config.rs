//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront, used to build links
//!
//! ## Optional
//! - `STOREFRONT_NO_DATASOURCE_ITEM` - Content item holding the placeholder
//!   shown by components without a data source
//!   (default: `/sitecore/content/Storefront/Global/System Messages/No Datasource`)

use thiserror::Error;
use url::Url;

/// Default content item for the "no data source" placeholder.
pub const DEFAULT_NO_DATASOURCE_ITEM: &str =
    "/sitecore/content/Storefront/Global/System Messages/No Datasource";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Public base URL for the storefront, without a trailing slash
    pub base_url: String,
    /// Path of the "no data source" placeholder content item
    pub no_datasource_item: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get_required(&lookup, "STOREFRONT_BASE_URL")?;
        let base_url = validate_base_url("STOREFRONT_BASE_URL", &base_url)?;
        let no_datasource_item = lookup("STOREFRONT_NO_DATASOURCE_ITEM")
            .unwrap_or_else(|| DEFAULT_NO_DATASOURCE_ITEM.to_string());

        Ok(Self {
            base_url,
            no_datasource_item,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required value from the lookup.
fn get_required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Validate that a base URL is an absolute http(s) URL and strip trailing slashes.
fn validate_base_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not contain a query or fragment".to_string(),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}
