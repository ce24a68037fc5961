//! HTTP handlers

pub mod health;
pub mod users;

use crate::error::Error;

/// Fallback for unmatched routes
pub async fn route_not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}
