use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HostelDto {
    pub id: i32,
    pub institution_id: i32,
    pub name: String,
    pub address: String,
    pub total_blocks: i32,
    pub total_rooms: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateHostelDto {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub total_blocks: i32,
    #[serde(default)]
    pub total_rooms: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateHostelDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_blocks: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rooms: Option<i32>,
}
