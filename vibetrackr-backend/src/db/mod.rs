//! Database access for the backend service

pub mod journals;
pub mod users;
