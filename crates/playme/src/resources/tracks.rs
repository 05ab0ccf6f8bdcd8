//! Track catalogue endpoint

use playme_protocol::{Method, QueryString, Track, query::params};

use super::Resource;
use crate::{client::Client, error::Result};

/// Track API resource.
///
/// Wraps the `track.*` method family.
#[derive(Clone)]
pub struct Tracks {
    client: Client,
}

impl Tracks {
    /// Create a new Tracks resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch a single track by catalogue code.
    ///
    /// Calls `track.get`. When `country` is `None` the client's default
    /// country scope applies.
    pub async fn get(&self, track_code: u64, country: Option<&str>) -> Result<Track> {
        let mut query = QueryString::new();
        query.insert(params::TRACK_CODE, track_code);
        if let Some(country) = country {
            query.insert(params::COUNTRY, country);
        }

        self.client.fetch_item(Method::TRACK.join("get"), query).await
    }
}

impl Resource for Tracks {
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
        let tracks = client.tracks();
        assert_eq!(tracks.client().base_url(), client.base_url());
    }
}
