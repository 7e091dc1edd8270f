//! Small badge showing the current session's role.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Role chip for dashboard headers. Renders nothing when no session claims
/// are available.
#[component]
pub fn RoleBadge() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        session.get().role().map(|role| {
            let class = format!("role-badge role-badge--{}", role.as_str());
            view! { <span class=class>{role.label()}</span> }
        })
    }
}
