//! Wire types for the portal REST API.
//!
//! Response structs stay tolerant: fields the backend may omit are
//! `Option` or defaulted collections, so one missing key does not turn a
//! whole payload into an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::claims::Role;

/// `POST /api/login` response. `token` and `role` are present on success.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// `POST /api/organizations` request body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterOrgRequest {
    pub name: String,
    pub org_domain: String,
    pub portal_admin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

/// `POST /api/organizations` response.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterOrgResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub admin_username: Option<String>,
    #[serde(default)]
    pub admin_email: Option<String>,
}

/// Course reference as it appears in organization listings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CourseRef {
    pub id: i64,
    pub title: String,
}

/// One organization row from `GET /api/organizations`.
#[derive(Clone, Debug, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub portal_admin: Option<String>,
    #[serde(default)]
    pub org_domain: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub courses: Vec<CourseRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

/// Platform totals from `GET /api/admin/system_stats`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub total_organizations: Option<u64>,
    #[serde(default)]
    pub total_courses: Option<u64>,
    #[serde(default)]
    pub total_portal_admins: Option<u64>,
    #[serde(default)]
    pub total_employees: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SystemStatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<SystemStats>,
}

/// Organization header block of the portal-admin statistics payload.
#[derive(Clone, Debug, Deserialize)]
pub struct OrgOverview {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub total_employees: Option<u64>,
    #[serde(default)]
    pub total_courses: Option<u64>,
    #[serde(default)]
    pub overall_completion_rate: Option<f64>,
    #[serde(default)]
    pub employees_at_risk: Option<u64>,
}

/// Per-course statistics row for the portal-admin dashboard.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseStats {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub enrolled_count: Option<u64>,
    #[serde(default)]
    pub completed_count: Option<u64>,
    #[serde(default)]
    pub avg_progress: Option<f64>,
    #[serde(default)]
    pub completion_rate: Option<f64>,
}

/// `GET /api/portal_admin/organization_statistics` response.
#[derive(Clone, Debug, Deserialize)]
pub struct OrgStatisticsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub organization: Option<OrgOverview>,
    #[serde(default)]
    pub course_statistics: Vec<CourseStats>,
}

/// One employee row from the roster endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

/// `GET /api/portal_admin/organizations/{org_id}/employees` response.
#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeRosterResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub total_employees: Option<u64>,
}

/// One content entry inside a course module.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentRef {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// One module of a course, with its content entries.
#[derive(Clone, Debug, Deserialize)]
pub struct ModuleSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contents: Vec<ContentRef>,
}

/// An assigned course with progress, from the employee endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub module_count: Option<u32>,
    #[serde(default)]
    pub modules: Vec<ModuleSummary>,
    /// Completion percentage, 0–100. Absent when never started.
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub completed_modules: Option<u32>,
}

/// `GET /api/employee/my_courses` response.
#[derive(Clone, Debug, Deserialize)]
pub struct MyCoursesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub courses: Vec<CourseSummary>,
}

/// `GET /api/employee/course/{course_id}` response.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseDetailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub course: Option<CourseSummary>,
}
