//! Artist catalogue endpoint

use playme_protocol::{Album, Artist, Method, QueryString, query::params};

use super::Resource;
use crate::{client::Client, error::Result};

/// Artist API resource.
///
/// Wraps the `artist.*` method family.
#[derive(Clone)]
pub struct Artists {
    client: Client,
}

impl Artists {
    /// Create a new Artists resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a single artist by catalogue code.
    ///
    /// Calls `artist.get`. When `country` is `None` the client's default
    /// country scope applies.
    pub async fn get(&self, artist_code: u64, country: Option<&str>) -> Result<Artist> {
        let mut query = QueryString::new();
        query.insert(params::ARTIST_CODE, artist_code);
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client
            .fetch_item(Method::ARTIST.join("get"), query)
            .await
    }

    /// List the albums in an artist's catalogue.
    ///
    /// Calls `artist.getAlbums`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use playme::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-apikey");
    /// let albums = client.artists().albums(421, Some("us")).await?;
    /// for album in albums {
    ///     println!("{} ({})", album.name, album.album_code);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn albums(&self, artist_code: u64, country: Option<&str>) -> Result<Vec<Album>> {
        let mut query = QueryString::new();
        query.insert(params::ARTIST_CODE, artist_code);
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client
            .fetch_collection(Method::ARTIST.join("getAlbums"), query)
            .await
    }
}

impl Resource for Artists {
    fn client(&self) -> &Client {
        &self.client
    }
}
