//! Genre catalogue endpoint

use playme_protocol::{Genre, Method, QueryString, query::params};

use super::Resource;
use crate::{client::Client, error::Result};

/// Genre API resource.
///
/// Wraps the `genre.*` method family.
#[derive(Clone)]
pub struct Genres {
    client: Client,
}

impl Genres {
    /// Create a new Genres resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the genres available in a country's catalogue.
    ///
    /// Calls `genre.list`. When `country` is `None` the client's default
    /// country scope applies.
    pub async fn list(&self, country: Option<&str>) -> Result<Vec<Genre>> {
        let mut query = QueryString::new();
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client
            .fetch_collection(Method::GENRE.join("list"), query)
            .await
    }
}

impl Resource for Genres {
    fn client(&self) -> &Client {
        &self.client
    }
}
