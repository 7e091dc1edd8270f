//! Access-denied page for authenticated sessions with the wrong role.
//!
//! Shown in place, without an automatic redirect: the user is signed in,
//! just not authorized, and deserves to see why. The only affordance is a
//! link back to the login entry point.

use leptos::prelude::*;

use crate::auth::claims::Role;

/// Access-denied notice showing the required and actual roles.
#[component]
pub fn AccessDenied(required: Role, actual: Option<Role>) -> impl IntoView {
    view! {
        <div class="denied-page">
            <div class="denied-page__card">
                <h1>"Access Denied"</h1>
                <p>"You don't have permission to access this page."</p>

                <dl class="denied-page__roles">
                    <dt>"Required role"</dt>
                    <dd>{required.label()}</dd>
                    <dt>"Your role"</dt>
                    <dd>{actual.map_or("Not logged in", Role::label)}</dd>
                </dl>

                <a class="btn btn--primary" href="/">
                    "Go to Login"
                </a>
            </div>
        </div>
    }
}
