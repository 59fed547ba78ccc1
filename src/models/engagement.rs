use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

/// Read-only feed entry shown on the dashboards. `time` is a relative
/// display string seeded with the data, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub time: String,
    pub priority: NotificationPriority,
    pub category: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MentorshipStatus {
    Active,
    Completed,
    Scheduled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipSession {
    pub id: u32,
    pub mentor_name: String,
    pub mentee_name: String,
    pub skill_focus: String,
    pub start_date: NaiveDate,
    /// Completion percentage, 0-100.
    pub progress: u32,
    pub last_meeting: NaiveDate,
    pub next_meeting: NaiveDate,
    pub status: MentorshipStatus,
}

/// Feedback exchanged between an employee and the review committee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: u32,
    pub employee_id: u32,
    pub from_user: String,
    pub from_role: String,
    pub message: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Per-department roster summary used by the reports view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAnalysis {
    pub department: String,
    pub total_employees: u32,
    pub with_idps: u32,
    pub avg_score: u32,
    pub top_skill_gap: String,
    pub critical_successors: u32,
}

/// Completed/pending split per department, seeded for the progress chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentProgress {
    pub department: String,
    pub completed: u32,
    pub pending: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarterlyInsight {
    pub quarter: String,
    pub insight: String,
    pub impact: Priority,
    pub recommendation: String,
}
