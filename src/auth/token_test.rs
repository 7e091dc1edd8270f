use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::json;

use super::*;

/// Build a three-segment token around `claims`. The signature segment is
/// junk: only the backend verifies signatures.
fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
    format!("{header}.{payload}.signature")
}

// =============================================================
// decode: round-trip
// =============================================================

#[test]
fn decode_round_trips_issued_claims() {
    let token = make_token(&json!({
        "user_id": 12,
        "username": "casey",
        "role": "portal_admin",
        "exp": 2_000_000_000,
    }));

    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, Some(12));
    assert_eq!(claims.username.as_deref(), Some("casey"));
    assert_eq!(claims.role, Some(Role::PortalAdmin));
    assert_eq!(claims.exp, Some(2_000_000_000));
}

#[test]
fn decode_preserves_opaque_extra_claims() {
    let token = make_token(&json!({
        "role": "employee",
        "exp": 2_000_000_000,
        "org_id": 3,
        "tenant": "acme",
    }));

    let claims = decode(&token).unwrap();
    assert_eq!(claims.extra.get("org_id").and_then(serde_json::Value::as_i64), Some(3));
    assert_eq!(
        claims.extra.get("tenant").and_then(serde_json::Value::as_str),
        Some("acme")
    );
}

#[test]
fn decode_accepts_padded_standard_base64_payload() {
    let payload = STANDARD.encode(serde_json::to_vec(&json!({"role": "admin", "exp": 5})).unwrap());
    let token = format!("header.{payload}.sig");
    let claims = decode(&token).unwrap();
    assert_eq!(claims.role, Some(Role::Admin));
}

// =============================================================
// decode: fail closed on garbage
// =============================================================

#[test]
fn decode_rejects_garbage_inputs() {
    for garbage in [
        "",
        "no-dots-here",
        "only.two",
        "one.two.three.four",
        "head.!!!not-base64!!!.sig",
        "..",
    ] {
        assert_eq!(decode(garbage), None, "should reject {garbage:?}");
    }
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    let token = format!("head.{payload}.sig");
    assert_eq!(decode(&token), None);
}

#[test]
fn decode_rejects_json_payload_that_is_not_an_object() {
    let payload = URL_SAFE_NO_PAD.encode(b"[1, 2, 3]");
    let token = format!("head.{payload}.sig");
    assert_eq!(decode(&token), None);
}

#[test]
fn decode_rejects_unknown_role_label() {
    let token = make_token(&json!({"role": "owner", "exp": 2_000_000_000}));
    assert_eq!(decode(&token), None);
}

// =============================================================
// is_expired: boundary and fail-closed behavior
// =============================================================

#[test]
fn expiry_boundary_is_inclusive() {
    let exp = 1_700_000_000_i64;
    let token = make_token(&json!({"role": "employee", "exp": exp}));

    // One millisecond before the instant: still valid.
    assert!(!is_expired(Some(&token), exp * 1000 - 1));
    // The instant itself: expired.
    assert!(is_expired(Some(&token), exp * 1000));
    // After: expired.
    assert!(is_expired(Some(&token), exp * 1000 + 1));
}

#[test]
fn absent_credential_is_expired() {
    assert!(is_expired(None, 0));
}

#[test]
fn malformed_credential_is_expired() {
    assert!(is_expired(Some("garbage"), 0));
    assert!(is_expired(Some(""), 0));
}

#[test]
fn credential_without_exp_claim_is_expired() {
    let token = make_token(&json!({"role": "admin", "username": "root"}));
    assert!(is_expired(Some(&token), 0));
}

#[test]
fn future_expiry_is_not_expired() {
    let token = make_token(&json!({"role": "admin", "exp": 2_000_000_000}));
    assert!(!is_expired(Some(&token), 1_000_000_000_000));
}

// =============================================================
// role extraction
// =============================================================

#[test]
fn role_propagates_absence() {
    assert_eq!(role(None), None);
}

#[test]
fn role_extracts_present_claim() {
    let claims = decode(&make_token(&json!({"role": "employee", "exp": 1}))).unwrap();
    assert_eq!(role(Some(&claims)), Some(Role::Employee));
}

#[test]
fn role_is_absent_when_claim_is_missing() {
    let claims = decode(&make_token(&json!({"exp": 1}))).unwrap();
    assert_eq!(role(Some(&claims)), None);
}
