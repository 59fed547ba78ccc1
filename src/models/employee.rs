use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle shared by IDPs and development activities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProgressStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Under Review")]
    UnderReview,
    Completed,
}

impl ProgressStatus {
    pub fn as_label(&self) -> &'static str {
        match self {
            ProgressStatus::Pending => "Pending",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::UnderReview => "Under Review",
            ProgressStatus::Completed => "Completed",
        }
    }

    pub fn from_label(value: &str) -> Option<ProgressStatus> {
        match value.to_lowercase().as_str() {
            "pending" => Some(ProgressStatus::Pending),
            "in progress" => Some(ProgressStatus::InProgress),
            "under review" => Some(ProgressStatus::UnderReview),
            "completed" => Some(ProgressStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_label(value: &str) -> Option<Priority> {
        match value.to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Functional,
    Leadership,
    Geographic,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Functional => "Functional",
            SkillCategory::Leadership => "Leadership",
            SkillCategory::Geographic => "Geographic",
        }
    }
}

/// Gap between current and required proficiency in one skill category.
/// `gap` is seeded as `required - current`, floored at zero; displays
/// assume that relationship but the store does not re-derive it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetencyGap {
    pub category: SkillCategory,
    pub current: u32,
    pub required: u32,
    pub gap: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ProgressStatus,
    pub due_date: NaiveDate,
    /// Completion percentage, 0-100.
    pub progress: u32,
    pub impact: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub role: String,
    pub target_role: String,
    pub idp_status: ProgressStatus,
    /// Assessment Development Centre score, 0-100.
    pub adc_score: u32,
    pub email: String,
    pub experience_years: u32,
    pub location: String,
    pub competency_gaps: Vec<CompetencyGap>,
    pub current_activities: Vec<Activity>,
}

impl Employee {
    pub fn gap_in(&self, category: SkillCategory) -> Option<&CompetencyGap> {
        self.competency_gaps.iter().find(|g| g.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in [
            ProgressStatus::Pending,
            ProgressStatus::InProgress,
            ProgressStatus::UnderReview,
            ProgressStatus::Completed,
        ] {
            assert_eq!(ProgressStatus::from_label(status.as_label()), Some(status));
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            ProgressStatus::from_label("in progress"),
            Some(ProgressStatus::InProgress)
        );
        assert_eq!(
            ProgressStatus::from_label("UNDER REVIEW"),
            Some(ProgressStatus::UnderReview)
        );
        assert_eq!(ProgressStatus::from_label("planned"), None);
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!(Priority::from_label("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_label("medium"), Some(Priority::Medium));
        assert_eq!(Priority::from_label("urgent"), None);
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&ProgressStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
