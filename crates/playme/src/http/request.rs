//! Request building and dispatch with retry logic

use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use url::Url;

use playme_protocol::{Method, QueryString, Response};

use crate::error::{Error, Result};

/// Longest body excerpt kept in an HTTP status error.
const BODY_EXCERPT_LIMIT: usize = 200;

/// A single playMe API call: a method name plus query parameters.
///
/// Requests are created through [`Client::request`](crate::Client::request),
/// which injects the API key and the client defaults. `Display` renders the
/// full request URL, and two requests compare equal exactly when their URLs
/// match.
///
/// # Example
///
/// ```rust,no_run
/// # use playme::{Client, Method};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = Client::new("my-apikey");
/// let response = client
///     .request(Method::ALBUM.join("getTracks"))
///     .param("albumCode", 782378)
///     .param("country", "it")
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Request {
    http: reqwest::Client,
    base_url: Url,
    method: Method,
    query: QueryString,
    timeout: Duration,
    max_retries: u32,
}

impl Request {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: Url,
        method: Method,
        query: QueryString,
        timeout: Duration,
        max_retries: u32,
    ) -> Self {
        Self {
            http,
            base_url,
            method,
            query,
            timeout,
            max_retries,
        }
    }

    /// Add or replace a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Add or replace every parameter in `query`.
    #[must_use]
    pub fn params(mut self, query: QueryString) -> Self {
        self.query.extend(query);
        self
    }

    /// The API method this request calls.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The query parameters as currently built.
    pub fn query(&self) -> &QueryString {
        &self.query
    }

    /// The full request URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL and method name do not combine
    /// into a valid URL.
    pub fn url(&self) -> Result<Url> {
        self.to_string()
            .parse()
            .map_err(|e: url::ParseError| Error::InvalidUrl(e.to_string()))
    }

    /// Dispatch the request and parse the reply envelope.
    ///
    /// The API reports failures inside the envelope, so an HTTP error status
    /// with an envelope body still parses here; callers see the failure when
    /// they inspect the status or extract items. Timeouts and 5xx replies
    /// without an envelope are retried with exponential backoff up to the
    /// configured maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Envelope`] when the body is not an envelope,
    /// [`Error::HttpStatus`] when an HTTP error status has a non-envelope
    /// body, and [`Error::Connection`] or [`Error::Timeout`] for transport
    /// failures.
    pub async fn send(self) -> Result<Response> {
        let url = self.url()?;

        tracing::debug!(method = %self.method, query = ?self.query, "dispatching playMe request");

        let mut attempt = 0;
        loop {
            match self
                .http
                .get(url.clone())
                .timeout(self.timeout)
                .send()
                .await
            {
                Ok(resp) => {
                    let status = resp.status();
                    let body = resp
                        .text()
                        .await
                        .map_err(|e| Error::Connection(e.to_string()))?;

                    // The API serves envelopes on HTTP error statuses too
                    match Response::from_json(&body) {
                        Ok(response) => {
                            tracing::debug!(
                                method = %self.method,
                                status = response.status().code(),
                                "playMe request completed"
                            );
                            return Ok(response);
                        }
                        Err(parse_err) => {
                            if status.is_client_error() || status.is_server_error() {
                                let error = Error::HttpStatus {
                                    status: status.as_u16(),
                                    body: excerpt(&body),
                                };

                                if error.is_retryable() && attempt < self.max_retries {
                                    attempt += 1;
                                    // Exponential backoff: 1s, 2s
                                    let delay = Duration::from_secs(2u64.pow(attempt - 1));
                                    tracing::warn!(
                                        method = %self.method,
                                        status = status.as_u16(),
                                        attempt,
                                        "retrying after HTTP error"
                                    );
                                    tokio::time::sleep(delay).await;
                                    continue;
                                }

                                return Err(error);
                            }

                            return Err(Error::Envelope(parse_err));
                        }
                    }
                }
                Err(e) if e.is_timeout() => {
                    if attempt >= self.max_retries {
                        return Err(Error::Timeout(self.timeout));
                    }
                    attempt += 1;
                    tracing::warn!(method = %self.method, attempt, "retrying after timeout");
                    tokio::time::sleep(Duration::from_secs(2u64.pow(attempt - 1))).await;
                }
                Err(e) => {
                    return Err(Error::Connection(e.to_string()));
                }
            }
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base_url.as_str().trim_end_matches('/');
        if self.query.is_empty() {
            write!(f, "{}/{}", base, self.method)
        } else {
            write!(f, "{}/{}?{}", base, self.method, self.query)
        }
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("base_url", &self.base_url.as_str())
            .field("method", &self.method)
            .field("query", &self.query)
            .finish()
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Request {}

impl Hash for Request {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LIMIT {
        return body.to_string();
    }
    let cut: String = body.chars().take(BODY_EXCERPT_LIMIT).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw_request(method: Method, query: QueryString) -> Request {
        Request::new(
            reqwest::Client::new(),
            Url::parse("http://api.playme.com").unwrap(),
            method,
            query,
            Duration::from_secs(30),
            2,
        )
    }

    #[test]
    fn display_renders_the_full_url() {
        let query = QueryString::new()
            .with("country", "it")
            .with("albumCode", 782378);
        let request = raw_request(Method::ALBUM.join("get"), query);
        assert_eq!(
            request.to_string(),
            "http://api.playme.com/album.get?albumCode=782378&country=it"
        );
    }

    #[test]
    fn display_without_parameters_has_no_query_marker() {
        let request = raw_request(Method::GENRE.join("list"), QueryString::new());
        assert_eq!(request.to_string(), "http://api.playme.com/genre.list");
    }

    #[test]
    fn url_parses_back_from_the_display_form() {
        let query = QueryString::new().with("albumCode", 1);
        let request = raw_request(Method::ALBUM.join("getTracks"), query);
        let url = request.url().unwrap();
        assert_eq!(url.path(), "/album.getTracks");
        assert_eq!(url.query(), Some("albumCode=1"));
    }

    #[test]
    fn base_url_with_a_path_keeps_the_path() {
        let request = Request::new(
            reqwest::Client::new(),
            Url::parse("http://proxy.example/playme/").unwrap(),
            Method::TRACK.join("get"),
            QueryString::new().with("trackCode", 9),
            Duration::from_secs(30),
            2,
        );
        assert_eq!(
            request.to_string(),
            "http://proxy.example/playme/track.get?trackCode=9"
        );
    }

    #[test]
    fn equal_parameters_mean_equal_requests() {
        let one = raw_request(
            Method::ALBUM.join("get"),
            QueryString::new().with("albumCode", 1).with("country", "it"),
        );
        let two = raw_request(
            Method::ALBUM.join("get"),
            QueryString::new().with("country", "it").with("albumCode", 1),
        );
        assert_eq!(one, two);

        let three = raw_request(
            Method::ALBUM.join("get"),
            QueryString::new().with("albumCode", 2).with("country", "it"),
        );
        assert_ne!(one, three);
    }

    #[test]
    fn param_overrides_earlier_values() {
        let request = raw_request(
            Method::ALBUM.join("get"),
            QueryString::new().with("country", "it"),
        )
        .param("country", "us");
        assert_eq!(request.query().get("country"), Some("us"));
    }

    #[test]
    fn debug_hides_the_apikey_value() {
        let request = raw_request(
            Method::ALBUM.join("get"),
            QueryString::new()
                .with("apikey", "super-secret")
                .with("albumCode", 1),
        );
        let debug = format!("{request:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("albumCode"));
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let short = "not found";
        assert_eq!(excerpt(short), "not found");

        let long = "x".repeat(500);
        let cut = excerpt(&long);
        assert_eq!(cut.len(), BODY_EXCERPT_LIMIT + 3);
        assert!(cut.ends_with("..."));
    }
}
