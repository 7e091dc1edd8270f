//! Employee dashboard: assigned courses with a derived progress summary.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::role_badge::RoleBadge;
use crate::net::types::CourseSummary;
use crate::state::progress::{ProgressSummary, summarize};
use crate::state::session::SessionState;

/// Employee dashboard page.
#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let courses = LocalResource::new(move || {
        let username = session.get().username().unwrap_or_default().to_owned();
        async move { crate::net::api::fetch_my_courses(&username).await }
    });

    view! {
        <div class="dashboard-page dashboard-page--employee">
            <header class="dashboard-page__header">
                <h1>"My Courses"</h1>
                <div class="dashboard-page__actions">
                    <RoleBadge/>
                    <LogoutButton/>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading your courses..."</p> }>
                {move || {
                    courses
                        .get()
                        .map(|list| {
                            let list = list.unwrap_or_default();
                            let summary = summarize(&list);
                            view! {
                                <ProgressOverview summary=summary/>
                                {if list.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "No courses assigned yet."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="course-grid">
                                            {list
                                                .into_iter()
                                                .map(|course| view! { <CourseCard course=course/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }}
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Derived progress counters shown above the course grid.
#[component]
fn ProgressOverview(summary: ProgressSummary) -> impl IntoView {
    view! {
        <div class="stat-tiles">
            <div class="stat-tile">
                <span class="stat-tile__value">{format!("{}%", summary.average_percent)}</span>
                <span class="stat-tile__label">"Overall progress"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{summary.completed}</span>
                <span class="stat-tile__label">"Completed"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{summary.in_progress}</span>
                <span class="stat-tile__label">"In progress"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{summary.not_started}</span>
                <span class="stat-tile__label">"Not started"</span>
            </div>
        </div>
    }
}

/// A clickable card linking to the course viewer.
#[component]
fn CourseCard(course: CourseSummary) -> impl IntoView {
    let href = format!("/employee/course/{}", course.id);
    let percent = course.progress.unwrap_or(0.0).clamp(0.0, 100.0);
    let module_count = course
        .module_count
        .map_or(course.modules.len(), |count| count as usize);

    view! {
        <a class="course-card" href=href>
            <span class="course-card__title">{course.title}</span>
            <span class="course-card__modules">{format!("{module_count} modules")}</span>
            <div class="course-card__bar">
                <div class="course-card__fill" style:width=format!("{percent}%")></div>
            </div>
            <span class="course-card__percent">{format!("{percent:.0}% complete")}</span>
        </a>
    }
}
