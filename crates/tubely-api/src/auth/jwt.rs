//! HS256 JWT issuing and validation

use crate::auth::models::JwtClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token issuer is not accepted")]
    InvalidIssuer,

    #[error("Token subject is not a valid user id")]
    InvalidSubject,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Resolves a bearer credential to the id of the user it was issued for.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<Uuid, TokenError>;
}

/// Symmetric (HS256) JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
        }
    }

    /// Issue an access token for `user_id` valid for `expires_in`.
    pub fn make_token(&self, user_id: Uuid, expires_in: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl TokenValidator for JwtService {
    fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
                _ => TokenError::Invalid(e.to_string()),
            },
        )?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::InvalidSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-characters";
    const ISSUER: &str = "tubely-access";

    #[test]
    fn test_round_trip() {
        let service = JwtService::new(SECRET, ISSUER);
        let user_id = Uuid::new_v4();
        let token = service.make_token(user_id, Duration::hours(1)).unwrap();

        assert_eq!(service.validate(&token).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::new(SECRET, ISSUER);
        let other = JwtService::new("another-secret-that-is-at-least-32-chars", ISSUER);
        let token = issuer.make_token(Uuid::new_v4(), Duration::hours(1)).unwrap();

        assert!(matches!(other.validate(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new(SECRET, ISSUER);
        let token = service
            .make_token(Uuid::new_v4(), Duration::seconds(-10))
            .unwrap();

        assert!(matches!(service.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let service = JwtService::new(SECRET, ISSUER);
        let foreign = JwtService::new(SECRET, "someone-else");
        let token = foreign.make_token(Uuid::new_v4(), Duration::hours(1)).unwrap();

        assert!(matches!(
            service.validate(&token),
            Err(TokenError::InvalidIssuer)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = JwtService::new(SECRET, ISSUER);
        assert!(matches!(
            service.validate("not.a.jwt"),
            Err(TokenError::Invalid(_))
        ));
    }
}
