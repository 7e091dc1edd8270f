use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_response_parses_success_payload() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"success": true, "message": "Login successful", "token": "a.b.c", "role": "employee"}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("a.b.c"));
    assert_eq!(resp.role, Some(Role::Employee));
}

#[test]
fn login_response_parses_failure_payload() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.token, None);
    assert_eq!(resp.role, None);
}

// =============================================================
// Organizations
// =============================================================

#[test]
fn organizations_response_parses_rows() {
    let resp: OrganizationsResponse = serde_json::from_str(
        r#"{"organizations": [
            {"id": 1, "name": "Acme", "portal_admin": "pat", "org_domain": "acme.test",
             "created": "2026-01-15", "status": "active",
             "courses": [{"id": 4, "title": "Onboarding"}]}
        ]}"#,
    )
    .unwrap();
    assert_eq!(resp.organizations.len(), 1);
    let org = &resp.organizations[0];
    assert_eq!(org.name, "Acme");
    assert_eq!(org.courses, vec![CourseRef { id: 4, title: "Onboarding".into() }]);
}

#[test]
fn organization_row_tolerates_missing_optionals() {
    let org: Organization = serde_json::from_str(r#"{"id": 2, "name": "Globex"}"#).unwrap();
    assert_eq!(org.status, None);
    assert!(org.courses.is_empty());
}

// =============================================================
// Stats and courses
// =============================================================

#[test]
fn system_stats_response_parses_totals() {
    let resp: SystemStatsResponse = serde_json::from_str(
        r#"{"success": true, "data": {"total_users": 10, "total_organizations": 2,
            "total_courses": 5, "total_portal_admins": 2, "total_employees": 7}}"#,
    )
    .unwrap();
    let stats = resp.data.unwrap();
    assert_eq!(stats.total_users, Some(10));
    assert_eq!(stats.total_employees, Some(7));
}

#[test]
fn my_courses_response_parses_course_with_modules() {
    let resp: MyCoursesResponse = serde_json::from_str(
        r#"{"success": true, "courses": [
            {"id": 3, "title": "Security 101", "description": null, "module_count": 2,
             "modules": [
                {"id": 1, "title": "Basics", "description": "intro",
                 "contents": [{"id": 9, "title": "Welcome", "content_type": "video"}]},
                {"id": 2, "title": "Advanced", "description": null, "contents": []}
             ],
             "progress": 50.0, "completed_modules": 1}
        ]}"#,
    )
    .unwrap();
    let course = &resp.courses[0];
    assert_eq!(course.modules.len(), 2);
    assert_eq!(course.modules[0].contents[0].content_type.as_deref(), Some("video"));
    assert_eq!(course.progress, Some(50.0));
}

#[test]
fn course_detail_response_tolerates_missing_course() {
    let resp: CourseDetailResponse =
        serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert!(resp.course.is_none());
}
