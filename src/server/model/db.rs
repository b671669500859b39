//! Database model type aliases and their conversions into API DTOs.
//!
//! Enumerated columns (role, room status, maintenance status and priority) are stored as
//! strings; converting a model whose column holds an unknown value fails with
//! [`Error::ParseError`].

use std::str::FromStr;

use crate::{
    model::{
        hostel::HostelDto,
        institution::InstitutionDto,
        maintenance::MaintenanceRequestDto,
        room::RoomDto,
        student::StudentDto,
        user::UserDto,
        warden::WardenDto,
    },
    server::error::Error,
};

pub type UserModel = entity::app_user::Model;
pub type InstitutionModel = entity::institution::Model;
pub type AdminModel = entity::admin::Model;
pub type HostelModel = entity::hostel::Model;
pub type RoomModel = entity::room::Model;
pub type WardenModel = entity::warden::Model;
pub type StudentModel = entity::student::Model;
pub type MaintenanceRequestModel = entity::maintenance_request::Model;

/// Parses a string column into its typed representation.
pub fn parse_column<T>(value: &str) -> Result<T, Error>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(Error::ParseError)
}

/// Splits the stored comma separated block list.
pub fn split_blocks(blocks: &str) -> Vec<String> {
    blocks
        .split(',')
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins block labels for storage, dropping empty labels.
pub fn join_blocks(blocks: &[String]) -> String {
    blocks
        .iter()
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

impl TryFrom<UserModel> for UserDto {
    type Error = Error;

    fn try_from(user: UserModel) -> Result<Self, Self::Error> {
        Ok(Self {
            role: parse_column(&user.role)?,
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            gender: user.gender,
            institution_id: user.institution_id,
            created_at: user.created_at,
        })
    }
}

impl From<InstitutionModel> for InstitutionDto {
    fn from(institution: InstitutionModel) -> Self {
        Self {
            id: institution.id,
            code: institution.code,
            name: institution.name,
            address: institution.address,
            contact_email: institution.contact_email,
            contact_phone: institution.contact_phone,
            website: institution.website,
            logo_url: institution.logo_url,
            created_at: institution.created_at,
        }
    }
}

impl From<HostelModel> for HostelDto {
    fn from(hostel: HostelModel) -> Self {
        Self {
            id: hostel.id,
            institution_id: hostel.institution_id,
            name: hostel.name,
            address: hostel.address,
            total_blocks: hostel.total_blocks,
            total_rooms: hostel.total_rooms,
            created_at: hostel.created_at,
        }
    }
}

impl TryFrom<RoomModel> for RoomDto {
    type Error = Error;

    fn try_from(room: RoomModel) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_column(&room.status)?,
            id: room.id,
            hostel_id: room.hostel_id,
            room_number: room.room_number,
            block: room.block,
            floor: room.floor,
            capacity: room.capacity,
            occupancy: room.occupancy,
            room_type: room.room_type,
            created_at: room.created_at,
        })
    }
}

/// Builds a [`WardenDto`] from a warden, its user account, and its optional hostel.
pub fn warden_dto(warden: WardenModel, user: UserModel, hostel: Option<HostelModel>) -> WardenDto {
    WardenDto {
        id: warden.id,
        user_id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        gender: user.gender,
        employee_id: warden.employee_id,
        hostel_id: warden.hostel_id,
        hostel_name: hostel.map(|h| h.name),
        assigned_blocks: split_blocks(&warden.assigned_blocks),
        created_at: warden.created_at,
    }
}

/// Builds a flat [`StudentDto`] from a student and its joined records.
pub fn student_dto(
    student: StudentModel,
    user: UserModel,
    hostel: Option<HostelModel>,
    room: Option<RoomModel>,
) -> StudentDto {
    StudentDto {
        id: student.id,
        user_id: user.id,
        institution_id: student.institution_id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        gender: user.gender,
        student_id: student.student_id,
        department: student.department,
        year_of_study: student.year_of_study,
        hostel_id: student.hostel_id,
        hostel_name: hostel.map(|h| h.name),
        room_id: student.room_id,
        room_number: room.map(|r| r.room_number),
        created_at: student.created_at,
    }
}

/// Builds a [`MaintenanceRequestDto`], with room number and student name when joined.
pub fn maintenance_request_dto(
    request: MaintenanceRequestModel,
    room_number: Option<String>,
    student_name: Option<String>,
) -> Result<MaintenanceRequestDto, Error> {
    Ok(MaintenanceRequestDto {
        priority: parse_column(&request.priority)?,
        status: parse_column(&request.status)?,
        id: request.id,
        room_id: request.room_id,
        room_number,
        student_id: request.student_id,
        student_name,
        issue_type: request.issue_type,
        description: request.description,
        created_at: request.created_at,
        updated_at: request.updated_at,
        resolved_at: request.resolved_at,
    })
}
