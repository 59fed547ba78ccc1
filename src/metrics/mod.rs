//! Derived statistics shared by every view. All functions here are pure;
//! the views never compute aggregates inline, so rounding and edge-case
//! behavior stay consistent across dashboards.

mod types;

pub use types::{GapSeverity, IconKind, PriorityFilter, ProgressBand};

use chrono::Datelike;

use crate::error::Error;
use crate::models::{
    Activity, ApprovalRequest, DepartmentAnalysis, Employee, Notification, NotificationPriority,
    Priority, ProgressStatus,
};

/// Requests still awaiting a decision.
pub fn pending_count(approvals: &[ApprovalRequest]) -> usize {
    approvals.iter().filter(|a| a.is_pending()).count()
}

/// Apply a priority filter, preserving order. `All` returns every entry.
pub fn filter_by_priority<'a>(
    approvals: &'a [ApprovalRequest],
    filter: PriorityFilter,
) -> Vec<&'a ApprovalRequest> {
    approvals
        .iter()
        .filter(|a| match filter {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => a.priority == priority,
        })
        .collect()
}

pub fn high_priority_count(approvals: &[ApprovalRequest]) -> usize {
    approvals
        .iter()
        .filter(|a| a.priority == Priority::High)
        .count()
}

/// Requests whose `requested_date` falls in the given calendar month.
pub fn requested_in_month(approvals: &[ApprovalRequest], year: i32, month: u32) -> usize {
    approvals
        .iter()
        .filter(|a| a.requested_date.year() == year && a.requested_date.month() == month)
        .count()
}

/// Sum of estimated costs over exactly the list passed in, pending or not.
pub fn total_budget(approvals: &[ApprovalRequest]) -> u64 {
    approvals.iter().map(|a| a.estimated_cost).sum()
}

/// Mean ADC score rounded to the nearest integer. An empty roster is an
/// explicit error, never a silent zero.
pub fn average_adc_score(employees: &[Employee]) -> Result<u32, Error> {
    if employees.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sum: u64 = employees.iter().map(|e| u64::from(e.adc_score)).sum();
    Ok(round_mean(sum, employees.len()))
}

pub fn count_by_status(employees: &[Employee], status: ProgressStatus) -> usize {
    employees
        .iter()
        .filter(|e| e.idp_status == status)
        .count()
}

/// Mean completion percentage across activities.
pub fn average_activity_progress(activities: &[Activity]) -> Result<u32, Error> {
    if activities.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sum: u64 = activities.iter().map(|a| u64::from(a.progress)).sum();
    Ok(round_mean(sum, activities.len()))
}

/// High-priority notifications, in feed order.
pub fn urgent_notifications(notifications: &[Notification]) -> Vec<&Notification> {
    notifications
        .iter()
        .filter(|n| n.priority == NotificationPriority::High)
        .collect()
}

/// Roster search for the profile browser: case-insensitive substring
/// match on name or email, optionally narrowed to one department.
/// `None` is the "All" department selector; an empty term matches
/// everyone.
pub fn search_roster<'a>(
    employees: &'a [Employee],
    term: &str,
    department: Option<&str>,
) -> Vec<&'a Employee> {
    let term = term.to_lowercase();
    employees
        .iter()
        .filter(|e| {
            let matches_term = e.name.to_lowercase().contains(&term)
                || e.email.to_lowercase().contains(&term);
            let matches_dept = department.map_or(true, |d| e.department == d);
            matches_term && matches_dept
        })
        .collect()
}

/// Roster slice for a manager responsible for the given departments.
pub fn team_members<'a>(employees: &'a [Employee], departments: &[&str]) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| departments.iter().any(|d| e.department == *d))
        .collect()
}

/// Total mapping from status to icon category.
pub fn status_icon(status: ProgressStatus) -> IconKind {
    match status {
        ProgressStatus::Completed => IconKind::Success,
        ProgressStatus::Pending => IconKind::Warning,
        ProgressStatus::UnderReview => IconKind::Danger,
        ProgressStatus::InProgress => IconKind::Neutral,
    }
}

/// Icon for a raw status label; unrecognized labels render as Neutral.
pub fn icon_for_label(label: &str) -> IconKind {
    match ProgressStatus::from_label(label) {
        Some(status) => status_icon(status),
        None => IconKind::Neutral,
    }
}

/// Bucket a gap value. Lower bounds are inclusive: 25 is Critical, 15 is
/// High, 10 is Medium.
pub fn gap_severity(gap: u32) -> GapSeverity {
    if gap >= 25 {
        GapSeverity::Critical
    } else if gap >= 15 {
        GapSeverity::High
    } else if gap >= 10 {
        GapSeverity::Medium
    } else {
        GapSeverity::Low
    }
}

/// Band a 0-100 progress value: 80 and up is on track, 60 and up at risk.
pub fn progress_band(progress: u32) -> ProgressBand {
    if progress >= 80 {
        ProgressBand::OnTrack
    } else if progress >= 60 {
        ProgressBand::AtRisk
    } else {
        ProgressBand::Behind
    }
}

/// Percentage of a department's roster covered by an IDP, rounded.
pub fn department_coverage_percentage(dept: &DepartmentAnalysis) -> Result<u32, Error> {
    if dept.total_employees == 0 {
        return Err(Error::DivisionByZero);
    }
    let ratio = f64::from(dept.with_idps) / f64::from(dept.total_employees);
    Ok((ratio * 100.0).round() as u32)
}

fn round_mean(sum: u64, count: usize) -> u32 {
    (sum as f64 / count as f64).round() as u32
}
