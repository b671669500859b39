//! Service layer for business logic.
//!
//! Services validate input, enforce institution scoping and room occupancy rules, run
//! multi-step writes inside transactions, and convert database models into API DTOs.

pub mod auth;
pub mod dashboard;
pub mod hostel;
pub mod institution;
pub mod maintenance;
pub mod room;
pub mod student;
pub mod user;
pub mod warden;
