//! Route access decisions.
//!
//! DESIGN
//! ======
//! The decision is a pure function over (stored credential, required role,
//! current time). Rendering and redirects live in the component adapter
//! (`components::route_guard`), keeping this logic unit-testable without a
//! browser. Nothing is cached between checks: every call reads storage
//! fresh and re-decodes, so a login or logout between two navigations
//! changes the next outcome.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::claims::{Role, SessionClaims};
use crate::auth::store::CredentialStore;
use crate::auth::token;

/// Outcome of a route access check.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteAccess {
    /// Session is valid and satisfies the route's role requirement.
    /// Carries the decoded claims for the wrapped view.
    Granted(SessionClaims),
    /// No usable session: credential missing, expired, or undecodable.
    /// The caller sends the user to the login entry point.
    NoSession,
    /// Authenticated, but the session's role does not match the route's.
    /// The caller explains instead of silently redirecting.
    WrongRole {
        required: Role,
        actual: Option<Role>,
    },
}

/// Decide access for a route given the stored credential.
///
/// `required` is `None` for routes that only need an authenticated,
/// unexpired session.
pub fn check_access(
    store: &impl CredentialStore,
    required: Option<Role>,
    now_ms: i64,
) -> RouteAccess {
    let credential = store.get();
    if token::is_expired(credential.as_deref(), now_ms) {
        return RouteAccess::NoSession;
    }

    // is_expired has already decoded the payload once; if decoding fails
    // anyway, the check still denies rather than panics.
    let Some(claims) = credential.as_deref().and_then(token::decode) else {
        return RouteAccess::NoSession;
    };

    match required {
        Some(required) if claims.role != Some(required) => RouteAccess::WrongRole {
            required,
            actual: claims.role,
        },
        _ => RouteAccess::Granted(claims),
    }
}
