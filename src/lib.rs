//! Administration backend for institutions and their hostels.
//!
//! The `server` feature provides the axum API, the `client` feature a typed HTTP client for
//! it. Both share the request and response types in [`model`].

pub mod model;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;
