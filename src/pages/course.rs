//! Course viewer: modules and content entries for one assigned course.
//!
//! Reads the course ID from the route parameter; content playback itself
//! (video, PDF) is served by the backend and out of scope here.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::logout_button::LogoutButton;
use crate::components::role_badge::RoleBadge;
use crate::net::types::CourseSummary;
use crate::state::session::SessionState;

/// Course viewer page at `/employee/course/:course_id`.
#[component]
pub fn CoursePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let course_id = params
            .read()
            .get("course_id")
            .and_then(|id| id.parse::<i64>().ok());
        let username = session.get().username().unwrap_or_default().to_owned();
        async move {
            match course_id {
                Some(id) => crate::net::api::fetch_course_detail(id, &username).await,
                None => None,
            }
        }
    });

    view! {
        <div class="dashboard-page dashboard-page--course">
            <header class="dashboard-page__header">
                <a class="btn btn--ghost" href="/employee">
                    "Back to courses"
                </a>
                <div class="dashboard-page__actions">
                    <RoleBadge/>
                    <LogoutButton/>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading course..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|course| match course {
                            Some(course) => view! { <CourseDetail course=course/> }.into_any(),
                            None => {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "This course is not available."
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

/// Course header, progress, and module outline.
#[component]
fn CourseDetail(course: CourseSummary) -> impl IntoView {
    let percent = course.progress.unwrap_or(0.0).clamp(0.0, 100.0);

    view! {
        <section class="course-detail">
            <h1>{course.title}</h1>
            {course.description.map(|text| view! { <p class="course-detail__blurb">{text}</p> })}

            <div class="course-card__bar">
                <div class="course-card__fill" style:width=format!("{percent}%")></div>
            </div>
            <p class="course-detail__progress">
                {format!(
                    "{:.0}% complete, {} of {} modules",
                    percent,
                    course.completed_modules.unwrap_or(0),
                    course.module_count.map_or(course.modules.len(), |count| count as usize),
                )}
            </p>

            <ol class="course-detail__modules">
                {course
                    .modules
                    .into_iter()
                    .map(|module| {
                        view! {
                            <li class="course-detail__module">
                                <h3>{module.title}</h3>
                                {module
                                    .description
                                    .map(|text| view! { <p>{text}</p> })}
                                <ul class="course-detail__contents">
                                    {module
                                        .contents
                                        .into_iter()
                                        .map(|content| {
                                            view! {
                                                <li>
                                                    <span class="content-chip">
                                                        {content
                                                            .content_type
                                                            .unwrap_or_else(|| "content".to_owned())}
                                                    </span>
                                                    {content.title}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
