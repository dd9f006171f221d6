use crate::config::AuthConfig;
use base64::Engine;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Claim set carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Malformed token")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

/// Issues and validates HS256 session tokens.
#[derive(Clone)]
pub struct TokenKeeper {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    issuer: String,
}

impl std::fmt::Debug for TokenKeeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeeper").field("ttl", &self.ttl).field("issuer", &self.issuer).finish_non_exhaustive()
    }
}

impl TokenKeeper {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl: Duration::from_secs(config.token_ttl_secs),
            issuer: config.token_issuer.clone(),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs a claim set for `sub` with the configured TTL and issuer.
    ///
    /// # Errors
    /// Returns `TokenError` if the claim set cannot be serialized or signed.
    pub fn issue(&self, sub: &str, role: Option<&str>) -> Result<String, TokenError> {
        self.issue_with(sub, role, self.ttl, &self.issuer)
    }

    /// Signs a claim set with a caller-supplied TTL and issuer in place of the
    /// configured defaults. The algorithm is always HS256.
    ///
    /// # Errors
    /// Returns `TokenError` if the claim set cannot be serialized or signed.
    pub fn issue_with(&self, sub: &str, role: Option<&str>, ttl: Duration, issuer: &str) -> Result<String, TokenError> {
        let iat = unix_now();
        let claims = Claims {
            sub: sub.to_string(),
            role: role.map(str::to_string),
            iat,
            exp: iat + ttl.as_secs() as usize,
            iss: issuer.to_string(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies signature, structure, and expiry, returning the claims.
    ///
    /// # Errors
    /// Returns `TokenError::Expired` for an elapsed expiry,
    /// `TokenError::InvalidSignature` for a key mismatch, and
    /// `TokenError::Malformed` for anything else.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }

    /// Reads the structural contents of a token WITHOUT any signature or
    /// expiry check. Never an authentication decision; returns `None` for
    /// unparseable input.
    #[must_use]
    pub fn decode(token: &str) -> Option<Claims> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return None,
        };
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

fn unix_now() -> usize {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or(Duration::from_secs(0)).as_secs() as usize
}
