//! Wire types for the playMe music catalogue API
//!
//! This crate holds the pure data layer shared by the playMe client: method
//! names, query parameters, the response envelope with its status table, and
//! the typed catalogue entities. The HTTP client lives in the `playme` crate;
//! everything here is transport-agnostic.
//!
//! # Type Organization
//!
//! - **Method names**: [`method`] - Dotted API method names
//! - **Query parameters**: [`query`] - Sorted, urlencoded parameters
//! - **Envelope**: [`envelope`] - The `{"response": {...}}` reply wrapper
//! - **Status codes**: [`status`] - The documented status table
//! - **Catalogue entities**: [`catalogue`] - Artists, albums, tracks, genres
//! - **Error types**: [`error`] - Parse errors and API-reported failures
//!
//! # Design Principles
//!
//! - **Zero I/O**: All types are pure data structures
//! - **Serialization**: serde-based, following the API's JSON wire format
//! - **No circular dependencies**: playme-protocol depends only on serde/url

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalogue;
pub mod envelope;
pub mod error;
pub mod method;
pub mod query;
pub mod status;

// Re-export commonly used types at crate level
pub use catalogue::{Album, Artist, CatalogueItem, Genre, Track};
pub use envelope::Response;
pub use error::{ProtocolError, ResponseError, Result};
pub use method::Method;
pub use query::QueryString;
pub use status::ResponseStatus;
