//! Configuration for the playMe client

use std::time::Duration;

use secrecy::SecretString;

/// Default request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries for transport failures.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for the playMe client.
///
/// Holds every knob a [`Client`](crate::Client) is built from. Values left
/// unset fall back to the crate defaults when the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key for authentication
    pub api_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Default two-letter country scope applied to every call
    pub country: Option<String>,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Maximum number of retries for failed requests
    pub max_retries: u32,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            country: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, then the
    /// following variables are read:
    /// - `PLAYME_API_KEY` for authentication
    /// - `PLAYME_BASE_URL` for the API base URL
    /// - `PLAYME_COUNTRY` for the default country scope
    /// - `PLAYME_TIMEOUT` for request timeout (in seconds)
    /// - `PLAYME_MAX_RETRIES` for maximum retry attempts
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("PLAYME_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("PLAYME_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(country) = env::var("PLAYME_COUNTRY") {
            config.country = Some(country);
        }

        if let Ok(timeout_str) = env::var("PLAYME_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(max_retries_str) = env::var("PLAYME_MAX_RETRIES")
            && let Ok(max_retries) = max_retries_str.parse::<u32>()
        {
            config.max_retries = max_retries;
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.country.is_some() {
            self.country = other.country;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.max_retries != DEFAULT_MAX_RETRIES {
            self.max_retries = other.max_retries;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }

        self
    }
}
