//! Logout control: clears the stored credential and returns to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::store::{BrowserStore, CredentialStore};
use crate::state::session::SessionState;

/// Button that ends the session client-side. There is no backend call:
/// removing the credential is the whole logout.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_click = move |_| {
        BrowserStore.remove();
        session.update(|s| s.claims = None);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <button class="btn btn--ghost" on:click=on_click>
            "Log out"
        </button>
    }
}
