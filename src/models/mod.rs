pub mod approval;
pub mod employee;
pub mod engagement;
pub mod identity;

pub use approval::{ApprovalRequest, Decision};
pub use employee::{Activity, CompetencyGap, Employee, Priority, ProgressStatus, SkillCategory};
pub use engagement::{
    DepartmentAnalysis, DepartmentProgress, FeedbackEntry, MentorshipSession, MentorshipStatus,
    Notification, NotificationKind, NotificationPriority, QuarterlyInsight,
};
pub use identity::{DemoAccount, Identity, Role};
