//! Common status envelope for JSON results.

use std::fmt;

use reference_storefront_core::ServiceProviderResult;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Success/error status shared by every JSON result.
///
/// Serializes as `Success`, `Errors`, `HasErrors` and, when set, `Url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseJsonResult {
    /// Whether the underlying operation succeeded.
    pub success: bool,
    /// Error messages to show the shopper.
    pub errors: Vec<String>,
    /// Where the browser should navigate next, if anywhere.
    pub url: Option<String>,
}

impl Default for BaseJsonResult {
    fn default() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            url: None,
        }
    }
}

impl BaseJsonResult {
    /// Create an empty, successful result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result carrying the status of a service call.
    #[must_use]
    pub fn from_service_result(result: &ServiceProviderResult) -> Self {
        let mut base = Self::new();
        base.set_errors_from(result);
        base
    }

    /// Create a failed result with a single error message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![message.into()],
            url: None,
        }
    }

    /// Copy the status of a service call, appending its messages on failure.
    pub fn set_errors_from(&mut self, result: &ServiceProviderResult) {
        self.success = result.success;
        if !result.success {
            self.errors
                .extend(result.system_messages.iter().map(|m| m.message.clone()));
        }
    }

    /// Record a local failure in `area`.
    pub fn set_errors(&mut self, area: &str, error: &impl fmt::Display) {
        self.success = false;
        self.errors.push(format!("{area}: {error}"));
    }

    /// Whether any errors have been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Serialize for BaseJsonResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.url.is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("BaseJsonResult", len)?;
        state.serialize_field("Success", &self.success)?;
        state.serialize_field("Errors", &self.errors)?;
        state.serialize_field("HasErrors", &self.has_errors())?;
        if let Some(url) = &self.url {
            state.serialize_field("Url", url)?;
        } else {
            state.skip_field("Url")?;
        }
        state.end()
    }
}
