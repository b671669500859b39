//! Server application core modules.
//!
//! This module contains all server-side functionality for the hostel backend: HTTP routing,
//! session authentication, database access, and the business operations behind the admin
//! and student APIs.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
