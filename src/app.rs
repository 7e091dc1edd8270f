//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::claims::Role;
use crate::components::route_guard::RequireRole;
use crate::pages::{
    admin::AdminDashboard, course::CoursePage, employee::EmployeeDashboard, login::LoginPage,
    portal_admin::PortalAdminDashboard,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// Every role-restricted route is wrapped in `RequireRole`; the login page
/// at `/` is the only public view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/courseport.css"/>
        <Title text="Courseport"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RequireRole role=Role::Admin>
                                <AdminDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("portal-admin")
                    view=|| {
                        view! {
                            <RequireRole role=Role::PortalAdmin>
                                <PortalAdminDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("employee")
                    view=|| {
                        view! {
                            <RequireRole role=Role::Employee>
                                <EmployeeDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("employee"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RequireRole role=Role::Employee>
                                <EmployeeDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=(
                        StaticSegment("employee"),
                        StaticSegment("course"),
                        ParamSegment("course_id"),
                    )
                    view=|| {
                        view! {
                            <RequireRole role=Role::Employee>
                                <CoursePage/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
