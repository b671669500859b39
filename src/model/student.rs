use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Student record flattened with its user account, hostel, and room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StudentDto {
    pub id: i32,
    pub user_id: i32,
    pub institution_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub student_id: String,
    pub department: String,
    pub year_of_study: i32,
    pub hostel_id: Option<i32>,
    pub hostel_name: Option<String>,
    pub room_id: Option<i32>,
    pub room_number: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateStudentDto {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub student_id: String,
    pub department: String,
    pub year_of_study: i32,
    #[serde(default)]
    pub room_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateStudentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<i32>,
    /// `null` releases the student's room
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub room_id: Option<Option<i32>>,
}
