//! Status codes reported inside playMe response envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status code carried by a playMe response envelope.
///
/// The API tunnels its own status codes over HTTP: a reply succeeded exactly
/// when the code is [`ResponseStatus::SUCCESS`], and every other documented
/// code names a specific failure. Codes outside the documented table are
/// preserved as-is and display as unknown.
///
/// # Example
///
/// ```
/// use playme_protocol::ResponseStatus;
///
/// assert!(ResponseStatus::SUCCESS.is_success());
/// assert_eq!(ResponseStatus::PERMISSION_DENIED.code(), 14030);
/// assert_eq!(
///     ResponseStatus::PERMISSION_DENIED.to_string(),
///     "Permission denied"
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResponseStatus(pub u32);

impl ResponseStatus {
    /// The request was successful.
    pub const SUCCESS: Self = Self(200);
    /// User not enabled to use this function.
    pub const USER_NOT_ENABLED: Self = Self(402);
    /// Missing parameter.
    pub const MISSING_PARAMETER: Self = Self(10010);
    /// Invalid parameter.
    pub const INVALID_PARAMETER: Self = Self(10020);
    /// Too many parameters used as primary key.
    pub const TOO_MANY_PRIMARY_KEYS: Self = Self(10040);
    /// Too many mutually exclusive parameters.
    pub const TOO_MANY_EXCLUSIVE_PARAMETERS: Self = Self(10050);
    /// Error while retrieving item data.
    pub const ITEM_RETRIEVAL_FAILED: Self = Self(10810);
    /// Authentication failure.
    pub const AUTHENTICATION_FAILURE: Self = Self(11000);
    /// Item not found.
    pub const ITEM_NOT_FOUND: Self = Self(13000);
    /// Item already exists.
    pub const ITEM_ALREADY_EXISTS: Self = Self(13010);
    /// User already unsubscribed.
    pub const USER_ALREADY_UNSUBSCRIBED: Self = Self(13020);
    /// Dependency item missing.
    pub const DEPENDENCY_ITEM_MISSING: Self = Self(13040);
    /// Item not owned by the user associated to the UAT.
    pub const ITEM_NOT_OWNED: Self = Self(13110);
    /// Authorization failed.
    pub const AUTHORIZATION_FAILED: Self = Self(14010);
    /// User authentication token missing, invalid or expired.
    pub const INVALID_USER_TOKEN: Self = Self(14011);
    /// Permission denied.
    pub const PERMISSION_DENIED: Self = Self(14030);
    /// Invalid or missing apikey.
    pub const INVALID_API_KEY: Self = Self(14031);
    /// Blacklisted apikey.
    pub const BLACKLISTED_API_KEY: Self = Self(14032);
    /// Unauthorized call.
    pub const UNAUTHORIZED_CALL: Self = Self(14033);
    /// Temporarily blocked.
    pub const TEMPORARILY_BLOCKED: Self = Self(14034);
    /// API method not found.
    pub const API_NOT_FOUND: Self = Self(14040);
    /// Search engine error.
    pub const SEARCH_ENGINE_ERROR: Self = Self(16000);
    /// Database error.
    pub const DB_ERROR: Self = Self(20000);
    /// User already exists.
    pub const USER_ALREADY_EXISTS: Self = Self(20010);
    /// Unable to assign credits.
    pub const CREDIT_ASSIGNMENT_FAILED: Self = Self(21000);

    /// The numeric code as reported on the wire.
    pub fn code(self) -> u32 {
        self.0
    }

    /// Whether this code marks a successful reply.
    ///
    /// Only [`ResponseStatus::SUCCESS`] qualifies; everything else, known or
    /// unknown, is a failure.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Human-readable description from the documented status table.
    ///
    /// Returns `None` for codes the table does not cover.
    pub fn description(self) -> Option<&'static str> {
        let text = match self.0 {
            200 => "The request was successful",
            402 => "User not enabled to use this function",
            10010 => "Missing parameter",
            10020 => "Invalid parameter",
            10040 => "Too many parameters as primary key",
            10050 => "Too many mutual exclusive parameters",
            10810 => "Error while retrieving item data",
            11000 => "Authentication Failure",
            13000 => "Item not found",
            13010 => "Item already exists",
            13020 => "User already unsubscribed",
            13040 => "Dependency item missing",
            13110 => "Item not owned by the user associated to the UAT",
            14010 => "Authorization failed",
            14011 => {
                "Missing user authentication token or authentication token not valid \
                 (possibly expired)"
            }
            14030 => "Permission denied",
            14031 => "Invalid or missing apikey",
            14032 => "Blacklisted apikey",
            14033 => "Unauthorized call",
            14034 => "Temporarily blocked",
            14040 => "API not found",
            16000 => "Search engine error",
            20000 => "DB error",
            20010 => "User already exists",
            21000 => "Unable to assign credits",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(text) => f.write_str(text),
            None => write!(f, "Unknown status code {}", self.0),
        }
    }
}

impl From<u32> for ResponseStatus {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<ResponseStatus> for u32 {
    fn from(status: ResponseStatus) -> Self {
        status.0
    }
}
