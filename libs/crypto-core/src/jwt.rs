//! Bearer token encoding and verification (HS256).
//!
//! Keys are built once at startup from the configured secret and passed by
//! handle into whatever needs them; there is no process-global key state.
//! Verification reports expiry distinctly from every other failure because
//! the gateway returns a different message for expired tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind as JwtErrorKind, Algorithm, DecodingKey, EncodingKey,
    Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims carried by an identity token. `sub` is the user id and the sole
/// trusted actor identity for authorization downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("missing or invalid token")]
    Invalid,
}

/// Encoding/decoding key pair plus token lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    pub fn from_secret(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Issue a token whose subject is the given user id.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verify a token and return its claims. Expired signatures are reported
    /// as [`TokenError::Expired`]; everything else collapses to `Invalid`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                JwtErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }

    /// Verify a token and parse its subject as the caller's user id.
    pub fn verify_subject(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Invalid)
    }
}
