use chrono::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use tubely_api::auth::{JwtService, TokenError, TokenValidator};
use uuid::Uuid;

/// Real JWT validation that records how often it was consulted
pub struct CountingTokenValidator {
    jwt: JwtService,
    calls: AtomicUsize,
}

impl CountingTokenValidator {
    pub fn new(secret: &str, issuer: &str) -> Self {
        Self {
            jwt: JwtService::new(secret, issuer),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn make_token(&self, user_id: Uuid) -> String {
        self.jwt
            .make_token(user_id, Duration::hours(1))
            .expect("Failed to sign token")
    }

    pub fn make_expired_token(&self, user_id: Uuid) -> String {
        self.jwt
            .make_token(user_id, Duration::seconds(-60))
            .expect("Failed to sign token")
    }
}

impl TokenValidator for CountingTokenValidator {
    fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.jwt.validate(token)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
