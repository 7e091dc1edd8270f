//! REST API helpers for communicating with the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! credential attached as a bearer header. Server-side (SSR): stubs
//! returning `None`/error since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade page content without crashing navigation.

#![allow(clippy::unused_async)]

use super::types::{
    CourseSummary, Employee, LoginResponse, Organization, OrgStatisticsResponse,
    RegisterOrgRequest, RegisterOrgResponse, SystemStats,
};

/// `Authorization` header value from the stored credential, if present.
#[cfg(feature = "hydrate")]
fn authorization() -> Option<String> {
    use crate::auth::store::{BrowserStore, CredentialStore};
    BrowserStore.get().map(|token| format!("Bearer {token}"))
}

/// Authenticate against `POST /api/login`.
///
/// A rejected login is an `Ok` with `success == false`; the backend
/// answers 401 with the same body shape.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the body is
/// not the expected shape.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Register an organization and its portal admin via `POST /api/organizations`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the body is
/// not the expected shape.
pub async fn register_organization(
    request: &RegisterOrgRequest,
) -> Result<RegisterOrgResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/organizations")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<RegisterOrgResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch every organization for the admin dashboard.
/// Returns `None` on any failure or on the server.
pub async fn fetch_organizations() -> Option<Vec<Organization>> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/organizations");
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::OrganizationsResponse>()
            .await
            .ok()
            .map(|body| body.organizations)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch platform totals from `/api/admin/system_stats`.
pub async fn fetch_system_stats(username: &str) -> Option<SystemStats> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/admin/system_stats")
            .query([("username", username)]);
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::SystemStatsResponse>()
            .await
            .ok()?
            .data
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Fetch organization statistics for the portal-admin dashboard.
pub async fn fetch_org_statistics(username: &str) -> Option<OrgStatisticsResponse> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/portal_admin/organization_statistics")
            .query([("username", username)]);
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<OrgStatisticsResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Fetch the employee roster of an organization.
pub async fn fetch_employee_roster(org_id: i64) -> Option<Vec<Employee>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/portal_admin/organizations/{org_id}/employees");
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::EmployeeRosterResponse>()
            .await
            .ok()
            .map(|body| body.employees)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = org_id;
        None
    }
}

/// Fetch the employee's assigned courses with progress.
pub async fn fetch_my_courses(username: &str) -> Option<Vec<CourseSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/employee/my_courses")
            .query([("username", username)]);
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::MyCoursesResponse>()
            .await
            .ok()
            .map(|body| body.courses)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Fetch one course's modules and progress for the course viewer.
pub async fn fetch_course_detail(course_id: i64, username: &str) -> Option<CourseSummary> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/employee/course/{course_id}");
        let mut req = gloo_net::http::Request::get(&url).query([("username", username)]);
        if let Some(auth) = authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::CourseDetailResponse>()
            .await
            .ok()?
            .course
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, username);
        None
    }
}
