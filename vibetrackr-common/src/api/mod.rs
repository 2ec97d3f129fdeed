//! Shared API types and helpers

pub mod auth;

pub use auth::{generate_token, hash_token, parse_bearer, ApiAuthError};
