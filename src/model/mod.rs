//! Request and response types shared by the server controllers and the API client.

pub mod api;
pub mod dashboard;
pub mod hostel;
pub mod institution;
pub mod maintenance;
pub mod room;
pub mod student;
pub mod user;
pub mod warden;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "null".
///
/// Combined with `#[serde(default)]`: a missing field yields `None`, an explicit `null`
/// yields `Some(None)`, and a value yields `Some(Some(value))`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
