//! Bearer credential extraction
//!
//! Works on a plain `HeaderMap` so it can be tested without building requests.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing authorization header")]
    Missing,

    #[error("Authorization header is not valid ASCII")]
    NotAscii,

    #[error("Invalid authorization header format")]
    WrongScheme,

    #[error("Empty bearer token")]
    EmptyToken,
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn get_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers.get(AUTHORIZATION).ok_or(BearerError::Missing)?;
    let value = value.to_str().map_err(|_| BearerError::NotAscii)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::WrongScheme)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(get_bearer_token(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            get_bearer_token(&headers_with("Basic dXNlcjpwYXNz")),
            Err(BearerError::WrongScheme)
        );
        assert_eq!(
            get_bearer_token(&headers_with("bearer abc")),
            Err(BearerError::WrongScheme)
        );
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(
            get_bearer_token(&headers_with("Bearer ")),
            Err(BearerError::EmptyToken)
        );
        assert_eq!(
            get_bearer_token(&headers_with("Bearer    ")),
            Err(BearerError::EmptyToken)
        );
    }

    #[test]
    fn test_non_ascii_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(get_bearer_token(&headers), Err(BearerError::NotAscii));
    }

    #[test]
    fn test_valid_token() {
        assert_eq!(
            get_bearer_token(&headers_with("Bearer eyJhbGciOi.payload.sig")),
            Ok("eyJhbGciOi.payload.sig")
        );
    }
}
