//! JWT payload inspection.
//!
//! Tokens are never verified here; the server does that. The client only
//! reads the `exp` claim to decide whether a stored token is still worth
//! sending, and treats anything it cannot read as expired.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch. NumericDate may be fractional.
    pub exp: f64,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if !self.exp.is_finite() {
            return None;
        }
        DateTime::from_timestamp_micros((self.exp * 1_000_000.0) as i64)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let now = now.timestamp_micros() as f64 / 1_000_000.0;
        !self.exp.is_finite() || self.exp <= now
    }
}

/// Decodes the payload segment of a `header.payload.signature` token.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;

    serde_json::from_slice(&bytes).ok()
}

/// Whether `token` carries an `exp` claim later than `now`.
pub fn is_token_valid_at(token: &str, now: DateTime<Utc>) -> bool {
    decode_claims(token).is_some_and(|claims| !claims.is_expired_at(now))
}

pub fn is_token_valid(token: &str) -> bool {
    is_token_valid_at(token, Utc::now())
}
