use log::info;

use crate::error::Error;
use crate::models::{ApprovalRequest, Decision};

/// Owns the in-memory approval list and enforces the request lifecycle:
/// pending -> approved | rejected, with no way out of a terminal state.
///
/// Decided requests are tagged, never deleted, so the record survives as
/// an audit trail; pending views drop them because filtering is by the
/// absence of a decision.
pub struct ApprovalQueue {
    requests: Vec<ApprovalRequest>,
}

impl ApprovalQueue {
    pub fn new(requests: Vec<ApprovalRequest>) -> Self {
        Self { requests }
    }

    pub fn all(&self) -> &[ApprovalRequest] {
        &self.requests
    }

    pub fn pending(&self) -> Vec<&ApprovalRequest> {
        self.requests.iter().filter(|r| r.is_pending()).collect()
    }

    pub fn get(&self, id: u32) -> Option<&ApprovalRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Decide a pending request, storing the reviewer comment alongside the
    /// outcome. Unknown ids and already-decided requests are rejected
    /// without touching the list.
    pub fn decide(
        &mut self,
        id: u32,
        decision: Decision,
        comment: &str,
    ) -> Result<&ApprovalRequest, Error> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::ApprovalNotFound(id))?;

        if request.status.is_some() {
            return Err(Error::AlreadyDecided(id));
        }

        request.status = Some(decision);
        request.admin_comment = Some(comment.to_string());
        info!("Request {id} ({}) decided: {decision:?}", request.title);
        Ok(&*request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    fn seed_queue() -> ApprovalQueue {
        ApprovalQueue::new(vec![ApprovalRequest {
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
        }])
    }

    #[test]
    fn approving_tags_the_record_and_empties_pending() {
        let mut queue = seed_queue();
        assert_eq!(queue.pending().len(), 1);

        let updated = queue.decide(1, Decision::Approved, "ok").unwrap();
        assert_eq!(updated.status, Some(Decision::Approved));
        assert_eq!(updated.admin_comment.as_deref(), Some("ok"));

        assert_eq!(queue.pending().len(), 0);
        // The record itself is retained.
        assert_eq!(queue.all().len(), 1);
    }

    #[test]
    fn rejecting_stores_the_comment() {
        let mut queue = seed_queue();
        let updated = queue
            .decide(1, Decision::Rejected, "budget exceeded")
            .unwrap();
        assert_eq!(updated.status, Some(Decision::Rejected));
        assert_eq!(updated.admin_comment.as_deref(), Some("budget exceeded"));
    }

    #[test]
    fn unknown_id_fails_without_mutation() {
        let mut queue = seed_queue();
        let before = queue.all().to_vec();

        assert_eq!(
            queue.decide(999, Decision::Approved, "x"),
            Err(Error::ApprovalNotFound(999))
        );
        assert_eq!(queue.all(), &before[..]);
    }

    #[test]
    fn terminal_states_cannot_be_redecided() {
        let mut queue = seed_queue();
        queue.decide(1, Decision::Approved, "ok").unwrap();

        assert_eq!(
            queue.decide(1, Decision::Rejected, "changed my mind"),
            Err(Error::AlreadyDecided(1))
        );
        let record = queue.get(1).unwrap();
        assert_eq!(record.status, Some(Decision::Approved));
        assert_eq!(record.admin_comment.as_deref(), Some("ok"));
    }
}
