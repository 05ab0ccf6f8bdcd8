//! Dotted API method names.

use std::borrow::Cow;
use std::fmt;

/// Name of a playMe API method, e.g. `album.getTracks`.
///
/// Methods are grouped into families keyed by their first segment; the
/// associated constants cover the catalogue families and [`join`](Self::join)
/// appends further segments.
///
/// # Example
///
/// ```
/// use playme_protocol::Method;
///
/// let method = Method::ALBUM.join("getTracks");
/// assert_eq!(method.as_str(), "album.getTracks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Method(Cow<'static, str>);

impl Method {
    /// The `artist` method family.
    pub const ARTIST: Method = Method(Cow::Borrowed("artist"));
    /// The `album` method family.
    pub const ALBUM: Method = Method(Cow::Borrowed("album"));
    /// The `track` method family.
    pub const TRACK: Method = Method(Cow::Borrowed("track"));
    /// The `genre` method family.
    pub const GENRE: Method = Method(Cow::Borrowed("genre"));

    /// Method with an arbitrary name, for calls without a typed wrapper.
    pub fn new(name: impl Into<String>) -> Self {
        Method(Cow::Owned(name.into()))
    }

    /// Append a dotted segment to the method name.
    #[must_use]
    pub fn join(&self, segment: &str) -> Method {
        Method(Cow::Owned(format!("{}.{}", self.0, segment)))
    }

    /// The full dotted name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        Method::new(name)
    }
}

impl From<String> for Method {
    fn from(name: String) -> Self {
        Method(Cow::Owned(name))
    }
}
