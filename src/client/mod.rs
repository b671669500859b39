//! Typed HTTP client for the hostel API.
//!
//! [`ApiClient`] holds a cookie-enabled `reqwest` client so the session cookie set by login
//! or registration is sent with every later request. Each resource has a borrowed service
//! wrapper obtained from the client, e.g. `client.hostels().list()`.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod hostel;
pub mod http;
pub mod institution;
pub mod maintenance;
pub mod profile;
pub mod room;
pub mod student;
pub mod warden;

pub use error::ClientError;
pub use http::ApiClient;
