#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::auth::claims::{Role, SessionClaims};

/// Claims of the currently granted session, shared via context so views can
/// show current-user info without re-decoding the credential.
///
/// Written by the route guard on grant and cleared on denial or logout.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub claims: Option<SessionClaims>,
}

impl SessionState {
    /// Username of the granted session, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.claims.as_ref()?.username.as_deref()
    }

    /// Role of the granted session, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref()?.role
    }
}
