pub mod access;
pub mod get_user;
