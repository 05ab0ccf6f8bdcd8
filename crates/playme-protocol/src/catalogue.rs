//! Catalogue entities returned by the playMe API.
//!
//! Single items arrive under their wire label, `{"response": {"album":
//! {...}}}`, and collections arrive as a list with each element wrapped
//! under the item label again, `{"response": {"albums": [{"album": {...}},
//! ...]}}`. The [`CatalogueItem`] trait ties a Rust type to both labels so
//! the envelope can extract either shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed catalogue entity with known wire labels.
pub trait CatalogueItem: DeserializeOwned + PartialEq {
    /// Label a single item is keyed under, e.g. `"album"`.
    const LABEL: &'static str;
    /// Label a collection is keyed under, e.g. `"albums"`.
    const COLLECTION_LABEL: &'static str;
}

/// An artist in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Primary key of the artist.
    pub artist_code: u64,
    /// Display name.
    pub name: String,
    /// Country the catalogue entry is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CatalogueItem for Artist {
    const LABEL: &'static str = "artist";
    const COLLECTION_LABEL: &'static str = "artists";
}

/// An album in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Primary key of the album.
    pub album_code: u64,
    /// Album title.
    pub name: String,
    /// Primary key of the main artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_code: Option<u64>,
    /// Name of the main artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    /// Release year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Number of tracks on the album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
}

impl CatalogueItem for Album {
    const LABEL: &'static str = "album";
    const COLLECTION_LABEL: &'static str = "albums";
}

/// A track in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Primary key of the track.
    pub track_code: u64,
    /// Track title.
    pub name: String,
    /// Primary key of the album the track belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_code: Option<u64>,
    /// Primary key of the performing artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_code: Option<u64>,
    /// Position on the album, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl CatalogueItem for Track {
    const LABEL: &'static str = "track";
    const COLLECTION_LABEL: &'static str = "tracks";
}

/// A genre in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    /// Primary key of the genre.
    pub genre_code: u64,
    /// Genre name.
    pub name: String,
}

impl CatalogueItem for Genre {
    const LABEL: &'static str = "genre";
    const COLLECTION_LABEL: &'static str = "genres";
}
