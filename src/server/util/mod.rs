//! Utility functions shared by services.

pub mod employee_id;
pub mod password;
pub mod validate;
