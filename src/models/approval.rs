use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Priority;

/// Terminal outcome of an approval request. A request with no decision is
/// pending; there is no explicit pending variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

/// An IDP-related request awaiting review. Decided requests keep their
/// record; they are filtered out of pending views by the absent `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub id: u32,
    pub employee_id: u32,
    pub employee_name: String,
    pub request_type: String,
    pub title: String,
    pub description: String,
    /// Whole-currency amount, not subdivided.
    pub estimated_cost: u64,
    pub duration: String,
    pub priority: Priority,
    pub requested_date: NaiveDate,
    pub manager_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
}

impl ApprovalRequest {
    pub fn is_pending(&self) -> bool {
        self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_request_omits_status_fields() {
        let request = ApprovalRequest {
            id: 1,
            employee_id: 3,
            employee_name: "Arun Verma".into(),
            request_type: "IDP Recommendation".into(),
            title: "Development Plan for DGM Role".into(),
            description: "Personalized development plan".into(),
            estimated_cost: 200_000,
            duration: "12-18 months".into(),
            priority: Priority::High,
            requested_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            manager_note: "Critical successor position".into(),
            status: None,
            admin_comment: None,
        };

        assert!(request.is_pending());
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("\"status\""));
        assert!(!json.contains("adminComment"));
    }

    #[test]
    fn decision_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Decision::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&Decision::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
