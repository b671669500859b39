//! Database fixtures for test execution.
//!
//! Each helper inserts records with standard test values and returns the stored models.
//! Numeric `n` arguments keep emails and codes unique within a test.

pub mod hostel;
pub mod institution;
pub mod maintenance;
pub mod student;
pub mod user;
pub mod warden;
