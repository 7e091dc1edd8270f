//! Portal-admin dashboard: organization statistics, per-course numbers,
//! and the employee roster.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::role_badge::RoleBadge;
use crate::net::types::{CourseStats, OrgStatisticsResponse};
use crate::state::session::SessionState;

/// Portal-admin dashboard page.
#[component]
pub fn PortalAdminDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let stats = LocalResource::new(move || {
        let username = session.get().username().unwrap_or_default().to_owned();
        async move { crate::net::api::fetch_org_statistics(&username).await }
    });

    view! {
        <div class="dashboard-page dashboard-page--portal-admin">
            <header class="dashboard-page__header">
                <h1>"Organization Overview"</h1>
                <div class="dashboard-page__actions">
                    <RoleBadge/>
                    <LogoutButton/>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading organization statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|resp| match resp {
                            Some(resp) => view! { <OrgStatistics resp=resp/> }.into_any(),
                            None => {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "Organization statistics are unavailable."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Statistics blocks plus the roster for the organization in the response.
#[component]
fn OrgStatistics(resp: OrgStatisticsResponse) -> impl IntoView {
    let overview = resp.organization;
    let courses = resp.course_statistics;

    view! {
        {overview
            .as_ref()
            .map(|org| {
                let completion = org.overall_completion_rate.unwrap_or(0.0);
                view! {
                    <section class="dashboard-page__section">
                        <h2>{org.name.clone()}</h2>
                        <div class="stat-tiles">
                            <div class="stat-tile">
                                <span class="stat-tile__value">
                                    {org.total_employees.unwrap_or(0)}
                                </span>
                                <span class="stat-tile__label">"Employees"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">
                                    {org.total_courses.unwrap_or(0)}
                                </span>
                                <span class="stat-tile__label">"Assigned courses"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">
                                    {format!("{completion:.0}%")}
                                </span>
                                <span class="stat-tile__label">"Overall completion"</span>
                            </div>
                            <div class="stat-tile">
                                <span class="stat-tile__value">
                                    {org.employees_at_risk.unwrap_or(0)}
                                </span>
                                <span class="stat-tile__label">"Employees at risk"</span>
                            </div>
                        </div>
                    </section>
                }
            })}

        <section class="dashboard-page__section">
            <h2>"Courses"</h2>
            {if courses.is_empty() {
                view! { <p class="dashboard-page__empty">"No courses assigned yet."</p> }
                    .into_any()
            } else {
                view! { <CourseStatsTable courses=courses/> }.into_any()
            }}
        </section>

        {overview.map(|org| view! { <EmployeeRoster org_id=org.id/> })}
    }
}

/// Per-course statistics table.
#[component]
fn CourseStatsTable(courses: Vec<CourseStats>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Course"</th>
                    <th>"Enrolled"</th>
                    <th>"Completed"</th>
                    <th>"Avg. progress"</th>
                    <th>"Completion rate"</th>
                </tr>
            </thead>
            <tbody>
                {courses
                    .into_iter()
                    .map(|course| {
                        let avg = course.avg_progress.unwrap_or(0.0);
                        let rate = course.completion_rate.unwrap_or(0.0);
                        view! {
                            <tr>
                                <td>{course.title}</td>
                                <td>{course.enrolled_count.unwrap_or(0)}</td>
                                <td>{course.completed_count.unwrap_or(0)}</td>
                                <td>{format!("{avg:.0}%")}</td>
                                <td>{format!("{rate:.0}%")}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Employee roster, fetched once the organization id is known.
#[component]
fn EmployeeRoster(org_id: i64) -> impl IntoView {
    let roster = LocalResource::new(move || crate::net::api::fetch_employee_roster(org_id));

    view! {
        <section class="dashboard-page__section">
            <h2>"Employees"</h2>
            <Suspense fallback=move || view! { <p>"Loading employees..."</p> }>
                {move || {
                    roster
                        .get()
                        .map(|list| {
                            let list = list.unwrap_or_default();
                            if list.is_empty() {
                                view! {
                                    <p class="dashboard-page__empty">"No employees yet."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Designation"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|employee| {
                                                    view! {
                                                        <tr>
                                                            <td>{employee.name}</td>
                                                            <td>{employee.email.unwrap_or_default()}</td>
                                                            <td>
                                                                {employee.designation.unwrap_or_default()}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
