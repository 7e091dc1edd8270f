use super::*;

fn claims(username: &str, role: Role) -> SessionClaims {
    SessionClaims {
        user_id: Some(1),
        username: Some(username.to_owned()),
        role: Some(role),
        exp: Some(2_000_000_000),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn session_state_defaults_empty() {
    let state = SessionState::default();
    assert!(state.claims.is_none());
    assert_eq!(state.username(), None);
    assert_eq!(state.role(), None);
}

#[test]
fn session_state_exposes_granted_claims() {
    let state = SessionState {
        claims: Some(claims("morgan", Role::Employee)),
    };
    assert_eq!(state.username(), Some("morgan"));
    assert_eq!(state.role(), Some(Role::Employee));
}

#[test]
fn accessors_tolerate_partial_claims() {
    let state = SessionState {
        claims: Some(SessionClaims {
            user_id: None,
            username: None,
            role: None,
            exp: None,
            extra: serde_json::Map::new(),
        }),
    };
    assert_eq!(state.username(), None);
    assert_eq!(state.role(), None);
}
