#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::net::types::CourseSummary;

/// Derived progress numbers for an employee's assigned courses, shown by
/// the dashboard's progress ring and counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    /// Mean completion percentage across all courses, rounded; absent
    /// progress counts as zero.
    pub average_percent: u32,
}

/// Summarize course progress. A course is completed at 100%, in progress
/// above 0%, and not started at 0% or with no progress recorded.
#[must_use]
pub fn summarize(courses: &[CourseSummary]) -> ProgressSummary {
    let mut summary = ProgressSummary {
        total: courses.len(),
        ..ProgressSummary::default()
    };
    if courses.is_empty() {
        return summary;
    }

    let mut percent_sum = 0.0_f64;
    for course in courses {
        let percent = course.progress.unwrap_or(0.0).clamp(0.0, 100.0);
        percent_sum += percent;
        if percent >= 100.0 {
            summary.completed += 1;
        } else if percent > 0.0 {
            summary.in_progress += 1;
        } else {
            summary.not_started += 1;
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    {
        summary.average_percent = (percent_sum / courses.len() as f64).round() as u32;
    }
    summary
}
