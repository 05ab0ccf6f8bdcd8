//! Main client implementation for the playMe API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use playme_protocol::{CatalogueItem, Method, QueryString, query::params};

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::Request,
    resources::{Albums, Artists, Genres, Tracks},
};

/// Reply serialization requested from the API. Only JSON is parsed.
const WIRE_FORMAT: &str = "json";

/// Main client for interacting with the playMe API.
///
/// The client holds the API key, the HTTP connection pool and the per-call
/// defaults, and hands out typed resources for the catalogue families.
///
/// # Example
///
/// ```rust,no_run
/// use playme::Client;
///
/// let client = Client::new("my-apikey");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
    country: Option<String>,
    timeout: Duration,
    max_retries: u32,

    // Lazy-initialized resources
    artists: OnceLock<Artists>,
    albums: OnceLock<Albums>,
    tracks: OnceLock<Tracks>,
    genres: OnceLock<Genres>,
}

impl Client {
    /// Create a new client with an API key.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the
    /// default configuration. For fallible construction with explicit error
    /// handling, use [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use playme::Client;
    ///
    /// let client = Client::new("my-apikey");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("Failed to build client with provided API key")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client
    /// configuration fails.
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// When no API key is configured and the `env` feature is enabled, the
    /// `PLAYME_API_KEY` environment variable fills in.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let api_key = match config.api_key {
            Some(api_key) => api_key,
            #[cfg(feature = "env")]
            None => std::env::var("PLAYME_API_KEY")
                .ok()
                .map(|s| SecretString::new(s.into_boxed_str()))
                .ok_or_else(|| {
                    Error::MissingConfig(
                        "No API key provided. Set PLAYME_API_KEY environment variable or \
                         provide one explicitly."
                            .to_string(),
                    )
                })?,
            #[cfg(not(feature = "env"))]
            None => {
                return Err(Error::MissingConfig("No API key provided".to_string()));
            }
        };

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(
                config
                    .user_agent
                    .unwrap_or_else(|| format!("playme-rust/{}", crate::VERSION)),
            )
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base_url_string = config
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e: url::ParseError| Error::InvalidUrl(e.to_string()))?;

        // Validate URL scheme
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )));
            }
        }

        let inner = Arc::new(ClientInner {
            http,
            base_url,
            api_key,
            country: config.country,
            timeout: config.timeout,
            max_retries: config.max_retries,
            artists: OnceLock::new(),
            albums: OnceLock::new(),
            tracks: OnceLock::new(),
            genres: OnceLock::new(),
        });

        Ok(Self { inner })
    }

    /// Access the artist catalogue.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use playme::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-apikey");
    /// let artist = client.artists().get(421, Some("it")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn artists(&self) -> &Artists {
        self.inner
            .artists
            .get_or_init(|| Artists::new(self.clone()))
    }

    /// Access the album catalogue.
    pub fn albums(&self) -> &Albums {
        self.inner.albums.get_or_init(|| Albums::new(self.clone()))
    }

    /// Access the track catalogue.
    pub fn tracks(&self) -> &Tracks {
        self.inner.tracks.get_or_init(|| Tracks::new(self.clone()))
    }

    /// Access the genre catalogue.
    pub fn genres(&self) -> &Genres {
        self.inner.genres.get_or_init(|| Genres::new(self.clone()))
    }

    /// Build a request for an arbitrary API method.
    ///
    /// The client's API key, the wire format and the default country scope
    /// (when configured) are injected into the query; [`Request::param`] can
    /// override `country` and `format` per call.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use playme::{Client, Method};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-apikey");
    /// let response = client
    ///     .request(Method::ALBUM.join("get"))
    ///     .param("albumCode", 782378)
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request(&self, method: impl Into<Method>) -> Request {
        let mut query = QueryString::new();
        query.insert(params::APIKEY, self.inner.api_key.expose_secret());
        query.insert(params::FORMAT, WIRE_FORMAT);
        if let Some(country) = &self.inner.country {
            query.insert(params::COUNTRY, country);
        }

        Request::new(
            self.inner.http.clone(),
            self.inner.base_url.clone(),
            method.into(),
            query,
            self.inner.timeout,
            self.inner.max_retries,
        )
    }

    /// Fetch a single catalogue item from `method`.
    pub(crate) async fn fetch_item<T: CatalogueItem>(
        &self,
        method: Method,
        query: QueryString,
    ) -> Result<T> {
        let response = self.request(method).params(query).send().await?;
        response.ensure_success()?;
        Ok(response.item::<T>()?)
    }

    /// Fetch a collection of catalogue items from `method`.
    pub(crate) async fn fetch_collection<T: CatalogueItem>(
        &self,
        method: Method,
        query: QueryString,
    ) -> Result<Vec<T>> {
        let response = self.request(method).params(query).send().await?;
        response.ensure_success()?;
        Ok(response.collection::<T>()?)
    }

    /// Get the base URL for the API
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the default country scope applied to every call.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.config.country = Some(country.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
