//! Test utilities for the hostel server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables to create, and
//! the resulting [`TestContext`] provides an in-memory SQLite database, a session backed by
//! a memory store, and fixture helpers for inserting records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
