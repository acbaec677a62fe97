pub mod accounts;
pub mod calculations;
pub mod health;

use crate::api::error::ApiError;

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}

/// Router-level fallback for unknown paths.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route")
}
