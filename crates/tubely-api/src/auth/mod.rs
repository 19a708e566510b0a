pub mod bearer;
pub mod jwt;
pub mod models;

pub use bearer::{get_bearer_token, BearerError};
pub use jwt::{JwtService, TokenError, TokenValidator};

use axum::http::HeaderMap;
use tubely_core::AppError;
use uuid::Uuid;

/// Resolve the requesting user from the `Authorization` header.
pub fn authenticate(tokens: &dyn TokenValidator, headers: &HeaderMap) -> Result<Uuid, AppError> {
    let token = get_bearer_token(headers).map_err(|e| {
        tracing::debug!(error = %e, "Bearer token extraction failed");
        AppError::Unauthorized("Couldn't find JWT".to_string())
    })?;

    tokens.validate(token).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        AppError::Unauthorized("Couldn't validate JWT".to_string())
    })
}
