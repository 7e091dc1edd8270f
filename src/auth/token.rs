//! Credential payload codec and expiry checks.
//!
//! ERROR HANDLING
//! ==============
//! Decoding never surfaces an error to callers: every malformed input
//! collapses to `None` so session checks fail closed. Failures are logged
//! for diagnosis only, and the expired/malformed distinction is never
//! user-visible.
//!
//! The signature segment is not checked here: the backend is the issuing
//! and verifying authority, and the client only reads the payload it was
//! handed.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::auth::claims::{Role, SessionClaims};

/// Decode the payload segment of a credential into claims.
///
/// Returns `None` for anything that is not a three-segment token carrying a
/// base64 JSON payload.
#[must_use]
pub fn decode(credential: &str) -> Option<SessionClaims> {
    let mut segments = credential.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            leptos::logging::warn!("credential is not a three-segment token");
            return None;
        }
    };

    let Some(bytes) = decode_base64(payload) else {
        leptos::logging::warn!("credential payload is not valid base64");
        return None;
    };

    match serde_json::from_slice(&bytes) {
        Ok(claims) => Some(claims),
        Err(err) => {
            leptos::logging::warn!("credential payload is not a claims object: {err}");
            None
        }
    }
}

/// Payload segments are url-safe unpadded; also accept the padded standard
/// alphabet.
fn decode_base64(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .ok()
}

/// Whether the credential is missing, undecodable, or at/past its expiry.
///
/// The expiry instant itself counts as expired, and a credential without an
/// `exp` claim is treated as already expired.
#[must_use]
pub fn is_expired(credential: Option<&str>, now_ms: i64) -> bool {
    let Some(credential) = credential else {
        return true;
    };
    let Some(claims) = decode(credential) else {
        return true;
    };
    let Some(exp) = claims.exp else {
        return true;
    };
    now_ms >= exp.saturating_mul(1000)
}

/// Role claim of decoded claims; absent in, absent out.
#[must_use]
pub fn role(claims: Option<&SessionClaims>) -> Option<Role> {
    claims.and_then(|c| c.role)
}
