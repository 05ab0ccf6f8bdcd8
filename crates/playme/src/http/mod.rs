//! HTTP layer for the playMe client
//!
//! This module builds request URLs from method names and query parameters,
//! dispatches them, and retries transport failures with exponential backoff.

pub use request::Request;

mod request;
