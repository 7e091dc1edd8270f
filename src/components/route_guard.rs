//! Route guard component: the rendering adapter around the pure access
//! decision in `auth::guard`.
//!
//! DESIGN
//! ======
//! The check runs in an `Effect`, which only executes in the browser; until
//! it resolves, a neutral placeholder renders. The protected subtree is
//! therefore never mounted before a decision exists; on denial the user
//! sees the login page or the access-denied view, never a flash of
//! protected content. Route views remount per navigation, so every
//! navigation re-runs the check against storage; no outcome survives a
//! login or logout in between.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::claims::Role;
use crate::auth::guard::{RouteAccess, check_access};
use crate::auth::store::BrowserStore;
use crate::pages::denied::AccessDenied;
use crate::state::session::SessionState;
use crate::util::clock;

/// Wraps a protected route subtree and gates it by session state.
///
/// With `role` set, the session must carry exactly that role; without it,
/// any authenticated, unexpired session is admitted. A missing or expired
/// session navigates to the login entry point; a role mismatch renders the
/// access-denied view in place.
#[component]
pub fn RequireRole(
    #[prop(into, optional)] role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let access = RwSignal::new(None::<RouteAccess>);
    let navigate = use_navigate();

    Effect::new(move || {
        let outcome = check_access(&BrowserStore, role, clock::now_millis());
        match &outcome {
            RouteAccess::Granted(claims) => {
                session.update(|s| s.claims = Some(claims.clone()));
            }
            _ => session.update(|s| s.claims = None),
        }
        if outcome == RouteAccess::NoSession {
            navigate("/", NavigateOptions::default());
        }
        access.set(Some(outcome));
    });

    move || match access.get() {
        Some(RouteAccess::Granted(_)) => children(),
        Some(RouteAccess::WrongRole { required, actual }) => {
            view! { <AccessDenied required=required actual=actual/> }.into_any()
        }
        // Still checking, or navigating back to login.
        Some(RouteAccess::NoSession) | None => view! { <CheckingSession/> }.into_any(),
    }
}

/// Neutral placeholder shown while the session check resolves.
#[component]
fn CheckingSession() -> impl IntoView {
    view! {
        <div class="session-check">
            <div class="session-check__spinner" aria-label="Checking session"></div>
        </div>
    }
}
