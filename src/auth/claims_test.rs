use super::*;

// =============================================================
// Role wire labels
// =============================================================

#[test]
fn role_serializes_to_wire_labels() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(
        serde_json::to_string(&Role::PortalAdmin).unwrap(),
        "\"portal_admin\""
    );
    assert_eq!(
        serde_json::to_string(&Role::Employee).unwrap(),
        "\"employee\""
    );
}

#[test]
fn role_deserializes_from_wire_labels() {
    let role: Role = serde_json::from_str("\"portal_admin\"").unwrap();
    assert_eq!(role, Role::PortalAdmin);
}

#[test]
fn role_rejects_unknown_label() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn role_display_matches_wire_label() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Employee.as_str(), "employee");
}

// =============================================================
// Role navigation and labels
// =============================================================

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin");
    assert_eq!(Role::PortalAdmin.dashboard_path(), "/portal-admin");
    assert_eq!(Role::Employee.dashboard_path(), "/employee");
}

#[test]
fn role_labels_are_distinct() {
    assert_ne!(Role::Admin.label(), Role::PortalAdmin.label());
    assert_ne!(Role::PortalAdmin.label(), Role::Employee.label());
}

// =============================================================
// SessionClaims shape
// =============================================================

#[test]
fn claims_deserialize_full_payload() {
    let claims: SessionClaims = serde_json::from_str(
        r#"{"user_id": 7, "username": "pat", "role": "employee", "exp": 1999999999}"#,
    )
    .unwrap();
    assert_eq!(claims.user_id, Some(7));
    assert_eq!(claims.username.as_deref(), Some("pat"));
    assert_eq!(claims.role, Some(Role::Employee));
    assert_eq!(claims.exp, Some(1_999_999_999));
    assert!(claims.extra.is_empty());
}

#[test]
fn claims_tolerate_missing_fields() {
    let claims: SessionClaims = serde_json::from_str("{}").unwrap();
    assert_eq!(claims.user_id, None);
    assert_eq!(claims.username, None);
    assert_eq!(claims.role, None);
    assert_eq!(claims.exp, None);
}

#[test]
fn claims_carry_unknown_fields_in_extra() {
    let claims: SessionClaims = serde_json::from_str(
        r#"{"role": "admin", "exp": 1, "org_id": 42, "iss": "portal"}"#,
    )
    .unwrap();
    assert_eq!(claims.extra.get("org_id").and_then(serde_json::Value::as_i64), Some(42));
    assert_eq!(
        claims.extra.get("iss").and_then(serde_json::Value::as_str),
        Some("portal")
    );
}

#[test]
fn claims_reject_unknown_role_label() {
    let result = serde_json::from_str::<SessionClaims>(r#"{"role": "owner", "exp": 1}"#);
    assert!(result.is_err());
}
