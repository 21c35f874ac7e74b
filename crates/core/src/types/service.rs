//! Envelopes returned by the commerce service layer.

use serde::{Deserialize, Serialize};

/// A message attached to a service result, usually describing a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemMessage {
    /// Message text.
    pub message: String,
    /// Optional short title.
    pub title: Option<String>,
}

impl SystemMessage {
    /// Create a message with no title.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
        }
    }
}

/// Success/error status of a commerce service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceProviderResult {
    /// Whether the call succeeded.
    pub success: bool,
    /// Messages reported by the service.
    pub system_messages: Vec<SystemMessage>,
}

impl Default for ServiceProviderResult {
    fn default() -> Self {
        Self::succeeded()
    }
}

impl ServiceProviderResult {
    /// A successful result with no messages.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            system_messages: Vec::new(),
        }
    }

    /// A failed result carrying the given messages.
    #[must_use]
    pub fn failed<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            success: false,
            system_messages: messages.into_iter().map(SystemMessage::new).collect(),
        }
    }
}

/// A service status paired with the payload the call produced.
///
/// The payload is absent when the call failed before producing data.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse<T> {
    /// Status of the call.
    pub status: ServiceProviderResult,
    /// Data returned by the call.
    pub payload: Option<T>,
}

impl<T> ServiceResponse<T> {
    /// A successful response carrying `payload`.
    #[must_use]
    pub const fn ok(payload: T) -> Self {
        Self {
            status: ServiceProviderResult::succeeded(),
            payload: Some(payload),
        }
    }

    /// A failed response with no payload.
    #[must_use]
    pub const fn failed(status: ServiceProviderResult) -> Self {
        Self {
            status,
            payload: None,
        }
    }
}
