//! API resource endpoints
//!
//! This module contains the typed wrappers for the catalogue method
//! families, organized by the entity they return.

pub mod albums;
pub mod artists;
pub mod genres;
pub mod tracks;

pub use albums::Albums;
pub use artists::Artists;
pub use genres::Genres;
pub use tracks::Tracks;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
