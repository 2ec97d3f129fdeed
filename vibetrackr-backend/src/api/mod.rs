//! HTTP API handlers for the backend service

pub mod auth;
pub mod health;
pub mod journals;
pub mod users;

pub use auth::AuthUser;
pub use health::health_routes;
pub use journals::journal_routes;
pub use users::user_routes;
