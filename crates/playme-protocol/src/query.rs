//! Query parameters for playMe API calls.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// Wire names of query parameters with a fixed meaning.
pub mod params {
    /// Application key that authenticates every call.
    pub const APIKEY: &str = "apikey";
    /// Two-letter country the catalogue is scoped to.
    pub const COUNTRY: &str = "country";
    /// Reply serialization format.
    pub const FORMAT: &str = "format";
    /// User authentication token for user-scoped calls.
    pub const UAT: &str = "uat";
    /// Primary key of an artist.
    pub const ARTIST_CODE: &str = "artistCode";
    /// Primary key of an album.
    pub const ALBUM_CODE: &str = "albumCode";
    /// Primary key of a track.
    pub const TRACK_CODE: &str = "trackCode";
}

/// Query parameters for a single API call.
///
/// Parameters iterate in key order, so a given set always urlencodes to the
/// same string; equality and hashing follow from the same ordering. Values
/// are stringified on insert, matching how the API reads them.
///
/// The `Debug` form never contains the `apikey` value.
///
/// # Example
///
/// ```
/// use playme_protocol::QueryString;
///
/// let mut query = QueryString::new();
/// query.insert("country", "it");
/// query.insert("albumCode", 1);
/// assert_eq!(query.encode(), "albumCode=1&country=it");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryString {
    params: BTreeMap<String, String>,
}

impl QueryString {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.params.insert(key.into(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether `key` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Remove a parameter, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Values in key order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.values().map(String::as_str)
    }

    /// Key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Urlencoded form with keys in sorted order.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: BTreeMap<&str, &str> = self
            .iter()
            .filter(|(key, _)| *key != params::APIKEY)
            .collect();
        f.debug_tuple("QueryString").field(&redacted).finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for QueryString {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for QueryString {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryString {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
