//! System administrator dashboard: platform totals and the organization
//! registry.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::role_badge::RoleBadge;
use crate::net::types::{Organization, SystemStats};
use crate::state::session::SessionState;

/// Admin dashboard page.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let stats = LocalResource::new(move || {
        let username = session.get().username().unwrap_or_default().to_owned();
        async move { crate::net::api::fetch_system_stats(&username).await }
    });
    let orgs = LocalResource::new(|| crate::net::api::fetch_organizations());

    view! {
        <div class="dashboard-page dashboard-page--admin">
            <header class="dashboard-page__header">
                <h1>"Platform Overview"</h1>
                <div class="dashboard-page__actions">
                    <RoleBadge/>
                    <LogoutButton/>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|stats| view! { <StatTiles stats=stats.unwrap_or_default()/> })
                }}
            </Suspense>

            <section class="dashboard-page__section">
                <h2>"Organizations"</h2>
                <Suspense fallback=move || view! { <p>"Loading organizations..."</p> }>
                    {move || {
                        orgs.get()
                            .map(|list| {
                                let list = list.unwrap_or_default();
                                if list.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">"No organizations yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! { <OrganizationTable organizations=list/> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Row of platform-total tiles.
#[component]
fn StatTiles(stats: SystemStats) -> impl IntoView {
    let tile = |label: &'static str, value: Option<u64>| {
        view! {
            <div class="stat-tile">
                <span class="stat-tile__value">{value.unwrap_or(0)}</span>
                <span class="stat-tile__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="stat-tiles">
            {tile("Organizations", stats.total_organizations)}
            {tile("Courses", stats.total_courses)}
            {tile("Portal admins", stats.total_portal_admins)}
            {tile("Employees", stats.total_employees)}
            {tile("Users", stats.total_users)}
        </div>
    }
}

/// Organization registry table.
#[component]
fn OrganizationTable(organizations: Vec<Organization>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Domain"</th>
                    <th>"Portal admin"</th>
                    <th>"Status"</th>
                    <th>"Courses"</th>
                </tr>
            </thead>
            <tbody>
                {organizations
                    .into_iter()
                    .map(|org| {
                        view! {
                            <tr>
                                <td>{org.name}</td>
                                <td>{org.org_domain.unwrap_or_default()}</td>
                                <td>{org.portal_admin.unwrap_or_default()}</td>
                                <td>{org.status.unwrap_or_else(|| "unknown".to_owned())}</td>
                                <td>{org.courses.len()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
