//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions store (Valkey in production,
//! an in-memory store in tests).

pub mod user;
