//! Error types for envelope parsing and API-reported failures.
//!
//! Failures split into two tiers: [`ProtocolError`] means the body could not
//! be read as a playMe envelope at all, while [`ResponseError`] means the API
//! understood the call and reported a failure status inside the envelope.

use std::fmt;

use crate::status::ResponseStatus;

/// Result type for envelope parsing operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while reading a playMe envelope or its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The body was not JSON shaped like `{"response": {...}}`.
    InvalidEnvelope(String),

    /// A required field was absent from the payload.
    MissingField(String),

    /// The `error.code` value could not be read as a status code.
    InvalidStatus(String),

    /// An item payload did not match the expected shape.
    InvalidItem {
        /// Wire label of the item that failed to parse.
        label: &'static str,
        /// What was wrong with the payload.
        reason: String,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvelope(msg) => write!(f, "Invalid response envelope: {}", msg),
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::InvalidStatus(value) => write!(f, "Invalid status code: {}", value),
            Self::InvalidItem { label, reason } => {
                write!(f, "Invalid {} payload: {}", label, reason)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// A failure reported by the API inside a response envelope.
///
/// Carries the envelope's status code and the description text the API sent
/// with it. When the API omits the description, the documented text for the
/// code fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// Status code from the envelope's error object.
    pub status: ResponseStatus,
    /// Description of the failure.
    pub description: String,
}

impl ResponseError {
    /// Build an error from a status code and the description the API sent.
    pub fn new(status: ResponseStatus, description: Option<String>) -> Self {
        let description = description.unwrap_or_else(|| status.to_string());
        Self { status, description }
    }

    /// The numeric status code.
    pub fn code(&self) -> u32 {
        self.status.code()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.description, self.status.code())
    }
}

impl std::error::Error for ResponseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_error_uses_the_reported_description() {
        let err = ResponseError::new(
            ResponseStatus::PERMISSION_DENIED,
            Some("Permission denied".to_string()),
        );
        assert_eq!(err.to_string(), "Permission denied (status 14030)");
        assert_eq!(err.code(), 14030);
    }

    #[test]
    fn response_error_falls_back_to_the_documented_text() {
        let err = ResponseError::new(ResponseStatus::ITEM_NOT_FOUND, None);
        assert_eq!(err.description, "Item not found");
        assert_eq!(err.to_string(), "Item not found (status 13000)");
    }

    #[test]
    fn response_error_for_unknown_code_keeps_the_number() {
        let err = ResponseError::new(ResponseStatus::from(31337), None);
        assert_eq!(err.to_string(), "Unknown status code 31337 (status 31337)");
    }

    #[test]
    fn protocol_error_messages() {
        let err = ProtocolError::InvalidEnvelope("expected a JSON object".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid response envelope: expected a JSON object"
        );

        let err = ProtocolError::MissingField("response".to_string());
        assert_eq!(err.to_string(), "Missing required field: response");

        let err = ProtocolError::InvalidItem {
            label: "album",
            reason: "not an object".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid album payload: not an object");
    }
}
