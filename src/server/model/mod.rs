//! Server application models and type definitions.
//!
//! Application state shared by the handlers, database model aliases with their DTO
//! conversions, and typed session wrappers.

pub mod app;
pub mod db;
pub mod session;
