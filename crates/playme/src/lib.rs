//! # playme
//!
//! Rust client for the playMe music catalogue web API supporting:
//! - Typed access to artists, albums, tracks and genres
//! - The generic `method + parameters` request surface for everything else
//! - The API's envelope protocol with its documented status table
//! - Automatic retries for transport failures
//! - Configuration from the environment
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use playme::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-apikey");
//!
//!     let album = client.albums().get(782378, Some("it")).await?;
//!     println!("{}", album.name);
//!
//!     for track in client.albums().tracks(album.album_code, Some("it")).await? {
//!         println!("  {}", track.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Methods without a typed wrapper go through [`Client::request`]:
//!
//! ```rust,no_run
//! use playme::{Client, Method};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-apikey");
//! let response = client
//!     .request(Method::ARTIST.join("getSimilar"))
//!     .param("artistCode", 421)
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::Request;
pub use playme_protocol::{
    Album, Artist, CatalogueItem, Genre, Method, ProtocolError, QueryString, Response,
    ResponseError, ResponseStatus, Track,
};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;

// Blocking facade (optional, feature-gated)
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use playme::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Album, Artist, Client, ClientConfig, Error, Genre, Method, QueryString, Response,
        ResponseError, ResponseStatus, Result, Track,
    };
}

/// Client version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://api.playme.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_BASE_URL, "http://api.playme.com");
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let status = ResponseStatus::SUCCESS;
        assert!(status.is_success());

        let query = QueryString::new().with("country", "it");
        assert_eq!(query.encode(), "country=it");
    }
}
