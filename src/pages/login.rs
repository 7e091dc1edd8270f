//! Login page: portal sign-in plus organization registration.
//!
//! On a successful login the issued credential is stored and its decoded
//! role picks the dashboard to navigate to. Failures surface the backend's
//! message inline; nothing navigates until a credential with a recognized
//! role is in hand.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

/// Login page — the public entry point at `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let show_register = RwSignal::new(false);

    view! {
        <div class="login-page">
            <header class="login-page__masthead">
                <h1>"Courseport"</h1>
                <p>"Training portal for your organization"</p>
            </header>

            <SignInForm/>

            <button
                class="btn btn--link"
                on:click=move |_| show_register.update(|v| *v = !*v)
            >
                {move || {
                    if show_register.get() {
                        "Hide organization registration"
                    } else {
                        "Register a new organization"
                    }
                }}
            </button>

            <Show when=move || show_register.get()>
                <RegisterOrgForm/>
            </Show>
        </div>
    }
}

/// Username/password form posting to the login endpoint.
#[component]
fn SignInForm() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(resp) if resp.success => match resp.token {
                        Some(token) => {
                            use crate::auth::store::{BrowserStore, CredentialStore};
                            BrowserStore.set(&token);
                            let claims = crate::auth::token::decode(&token);
                            match crate::auth::token::role(claims.as_ref()) {
                                Some(role) => {
                                    navigate(role.dashboard_path(), NavigateOptions::default());
                                }
                                None => error.set(Some(
                                    "Signed in, but the session carries no recognized role"
                                        .to_owned(),
                                )),
                            }
                        }
                        None => error.set(Some(
                            "Login succeeded but no session was issued".to_owned(),
                        )),
                    },
                    Ok(resp) => error.set(Some(
                        resp.message
                            .unwrap_or_else(|| "Invalid credentials".to_owned()),
                    )),
                    Err(err) => error.set(Some(format!("Login failed: {err}"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <label>
                "Username"
                <input
                    type="text"
                    name="username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            {move || error.get().map(|msg| view! { <p class="login-form__error">{msg}</p> })}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

/// Organization self-registration: creates the organization and its portal
/// admin account in one step.
#[component]
fn RegisterOrgForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let admin = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    // (success, message) of the last attempt.
    let notice = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let org_name = name.get().trim().to_owned();
        let org_domain = domain.get().trim().to_owned();
        let admin_name = admin.get().trim().to_owned();
        if org_name.is_empty() || org_domain.is_empty() || admin_name.is_empty() {
            notice.set(Some((
                false,
                "Organization name, domain, and portal admin are required".to_owned(),
            )));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            notice.set(None);

            let non_empty = |value: String| (!value.is_empty()).then_some(value);
            let request = crate::net::types::RegisterOrgRequest {
                name: org_name,
                org_domain,
                portal_admin: admin_name,
                admin_email: non_empty(email.get().trim().to_owned()),
                admin_password: non_empty(password.get()),
            };

            leptos::task::spawn_local(async move {
                match crate::net::api::register_organization(&request).await {
                    Ok(resp) if resp.success => notice.set(Some((
                        true,
                        resp.message
                            .unwrap_or_else(|| "Organization created".to_owned()),
                    ))),
                    Ok(resp) => notice.set(Some((
                        false,
                        resp.message
                            .unwrap_or_else(|| "Registration failed".to_owned()),
                    ))),
                    Err(err) => notice.set(Some((false, format!("Registration failed: {err}")))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (org_name, org_domain, admin_name);
        }
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h2>"Register your organization"</h2>
            <label>
                "Organization name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email domain"
                <input
                    type="text"
                    placeholder="example.com"
                    prop:value=move || domain.get()
                    on:input=move |ev| domain.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Portal admin username"
                <input
                    type="text"
                    prop:value=move || admin.get()
                    on:input=move |ev| admin.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Portal admin email (optional)"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Portal admin password (optional)"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>

            {move || {
                notice.get().map(|(ok, msg)| {
                    let class = if ok {
                        "register-form__notice register-form__notice--ok"
                    } else {
                        "register-form__notice register-form__notice--error"
                    };
                    view! { <p class=class>{msg}</p> }
                })
            }}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}
