//! HS256 admin tokens.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use thiserror::Error;

use crate::{AdminClaims, PrincipalId, Role, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed or badly signed token: {0}")]
    Decode(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("token lifetime must be positive and end within the representable range")]
    Lifetime,
}

/// Verifies bearer tokens. Object-safe so the HTTP layer can hold `Arc<dyn JwtValidator>`.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, TokenError>;
}

/// A freshly issued token as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// HS256 issuer + validator sharing one secret.
#[derive(Clone)]
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl core::fmt::Debug for Hs256Jwt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256Jwt").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl Hs256Jwt {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue an admin token valid from `now` for the configured ttl.
    pub fn issue_admin(&self, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        if self.ttl <= Duration::zero() {
            return Err(TokenError::Lifetime);
        }
        let expires_at = now.checked_add_signed(self.ttl).ok_or(TokenError::Lifetime)?;
        let claims = AdminClaims {
            sub: PrincipalId::new(),
            roles: vec![Role::ADMIN],
            issued_at: now,
            expires_at,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at,
        })
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, TokenError> {
        // Time checks run against the caller's clock in validate_claims.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let claims = jsonwebtoken::decode::<AdminClaims>(token, &self.decoding, &validation)?.claims;
        validate_claims(&claims, now)?;
        Ok(claims)
    }
}

/// Constant-time password comparison.
pub fn password_matches(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    let mut diff = a.len() ^ b.len();
    for (i, byte) in b.iter().enumerate() {
        diff |= usize::from(a.get(i).copied().unwrap_or(0) ^ byte);
    }
    diff == 0
}
