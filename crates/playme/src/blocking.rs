//! Blocking facade over the async client
//!
//! Each call drives the async client to completion on a private
//! current-thread runtime, so this module works without an ambient tokio
//! runtime. Calling these methods from inside an async context panics.

use playme_protocol::{Album, Artist, Genre, Method, Response, Track};

use crate::error::{Error, Result};
use crate::http::Request;

/// Blocking client for the playMe API.
///
/// # Example
///
/// ```rust,no_run
/// use playme::blocking::Client;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("my-apikey");
///     let album = client.album(782378, Some("it"))?;
///     println!("{}", album.name);
///     Ok(())
/// }
/// ```
pub struct Client {
    inner: crate::Client,
    runtime: tokio::runtime::Runtime,
}

impl Client {
    /// Create a new blocking client with an API key.
    ///
    /// # Panics
    ///
    /// Panics if the client or its runtime cannot be built. For fallible
    /// construction use [`Client::try_new()`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::try_new(api_key).expect("Failed to build blocking client with provided API key")
    }

    /// Create a new blocking client with an API key (fallible version).
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_async(crate::Client::try_new(api_key)?)
    }

    /// Wrap an already-configured async client.
    pub fn from_async(client: crate::Client) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            inner: client,
            runtime,
        })
    }

    /// Fetch a single artist by catalogue code.
    pub fn artist(&self, artist_code: u64, country: Option<&str>) -> Result<Artist> {
        self.runtime
            .block_on(self.inner.artists().get(artist_code, country))
    }

    /// List the albums in an artist's catalogue.
    pub fn artist_albums(&self, artist_code: u64, country: Option<&str>) -> Result<Vec<Album>> {
        self.runtime
            .block_on(self.inner.artists().albums(artist_code, country))
    }

    /// Fetch a single album by catalogue code.
    pub fn album(&self, album_code: u64, country: Option<&str>) -> Result<Album> {
        self.runtime
            .block_on(self.inner.albums().get(album_code, country))
    }

    /// List the tracks on an album.
    pub fn album_tracks(&self, album_code: u64, country: Option<&str>) -> Result<Vec<Track>> {
        self.runtime
            .block_on(self.inner.albums().tracks(album_code, country))
    }

    /// Fetch a single track by catalogue code.
    pub fn track(&self, track_code: u64, country: Option<&str>) -> Result<Track> {
        self.runtime
            .block_on(self.inner.tracks().get(track_code, country))
    }

    /// List the genres available in a country's catalogue.
    pub fn genres(&self, country: Option<&str>) -> Result<Vec<Genre>> {
        self.runtime.block_on(self.inner.genres().list(country))
    }

    /// Build a request for an arbitrary API method.
    pub fn request(&self, method: impl Into<Method>) -> Request {
        self.inner.request(method)
    }

    /// Dispatch a request built with [`request`](Self::request).
    pub fn send(&self, request: Request) -> Result<Response> {
        self.runtime.block_on(request.send())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_client_builds_without_network() {
        let client = Client::try_new("test-key").unwrap();
        let request = client.request(Method::ALBUM.join("get"));
        assert_eq!(request.method().as_str(), "album.get");
    }
}
