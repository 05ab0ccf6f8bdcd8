//! Album catalogue endpoint

use playme_protocol::{Album, Method, QueryString, Track, query::params};

use super::Resource;
use crate::{client::Client, error::Result};

/// Album API resource.
///
/// Wraps the `album.*` method family.
#[derive(Clone)]
pub struct Albums {
    client: Client,
}

impl Albums {
    /// Create a new Albums resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a single album by catalogue code.
    ///
    /// Calls `album.get`. When `country` is `None` the client's default
    /// country scope applies.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use playme::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-apikey");
    /// let album = client.albums().get(782378, Some("it")).await?;
    /// println!("{}", album.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, album_code: u64, country: Option<&str>) -> Result<Album> {
        let mut query = QueryString::new();
        query.insert(params::ALBUM_CODE, album_code);
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client.fetch_item(Method::ALBUM.join("get"), query).await
    }

    /// List the tracks on an album.
    ///
    /// Calls `album.getTracks`.
    pub async fn tracks(&self, album_code: u64, country: Option<&str>) -> Result<Vec<Track>> {
        let mut query = QueryString::new();
        query.insert(params::ALBUM_CODE, album_code);
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client
            .fetch_collection(Method::ALBUM.join("getTracks"), query)
            .await
    }
}

impl Resource for Albums {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_is_reachable_from_the_client() {
        let client = Client::new("test-key");
        let albums = client.albums();
        assert_eq!(albums.client().base_url(), client.base_url());
    }
}
