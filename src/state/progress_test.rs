use super::*;
use crate::net::types::CourseSummary;

fn course(id: i64, progress: Option<f64>) -> CourseSummary {
    CourseSummary {
        id,
        title: format!("Course {id}"),
        description: None,
        module_count: None,
        modules: Vec::new(),
        progress,
        completed_modules: None,
    }
}

#[test]
fn empty_course_list_summarizes_to_zeroes() {
    let summary = summarize(&[]);
    assert_eq!(summary, ProgressSummary::default());
}

#[test]
fn courses_bucket_by_completion_state() {
    let courses = vec![
        course(1, Some(100.0)),
        course(2, Some(40.0)),
        course(3, Some(0.0)),
        course(4, None),
    ];
    let summary = summarize(&courses);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.not_started, 2);
}

#[test]
fn average_counts_missing_progress_as_zero() {
    let courses = vec![course(1, Some(100.0)), course(2, None)];
    assert_eq!(summarize(&courses).average_percent, 50);
}

#[test]
fn average_rounds_to_nearest_percent() {
    let courses = vec![
        course(1, Some(33.0)),
        course(2, Some(33.0)),
        course(3, Some(34.5)),
    ];
    // (33 + 33 + 34.5) / 3 = 33.5 -> 34
    assert_eq!(summarize(&courses).average_percent, 34);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let courses = vec![course(1, Some(250.0)), course(2, Some(-10.0))];
    let summary = summarize(&courses);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.not_started, 1);
    assert_eq!(summary.average_percent, 50);
}
