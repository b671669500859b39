//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors against an in-memory database, and
//! the resulting responses are checked for status codes and decoded bodies.

mod auth;
mod dashboard;
mod hostel;
mod institution;
mod maintenance;
mod profile;
mod student;

use hostel_test_utils::prelude::*;

use crate::util::{json_body, status, TestContextExt};
