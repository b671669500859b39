//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`]
//! so that services can run them on a pooled connection or inside a transaction.
//! Lookups taking an `institution_id` only return records of that institution.

pub mod admin;
pub mod hostel;
pub mod institution;
pub mod maintenance;
pub mod room;
pub mod student;
pub mod user;
pub mod warden;
