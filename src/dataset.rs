//! Seeded in-memory dataset. Values double as test vectors for the
//! metrics module, so they are ported verbatim rather than invented.

use chrono::NaiveDate;

use crate::models::{
    Activity, ApprovalRequest, CompetencyGap, DemoAccount, DepartmentAnalysis, DepartmentProgress,
    Employee, FeedbackEntry, MentorshipSession, MentorshipStatus, Notification, NotificationKind,
    NotificationPriority, Priority, ProgressStatus, QuarterlyInsight, Role, SkillCategory,
};

/// Login shortcuts on the sign-in screen.
pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "admin@powergrid.com",
        role: Role::Admin,
        name: "Sarah Mitchell",
    },
    DemoAccount {
        email: "manager@powergrid.com",
        role: Role::Manager,
        name: "Rajesh Kumar",
    },
    DemoAccount {
        email: "employee@powergrid.com",
        role: Role::Employee,
        name: "Priya Sharma",
    },
];

/// Everything the views read. Approvals are seeded separately because they
/// are the one mutable collection (owned by the approval queue).
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub notifications: Vec<Notification>,
    pub mentorships: Vec<MentorshipSession>,
    pub feedback: Vec<FeedbackEntry>,
    pub department_analysis: Vec<DepartmentAnalysis>,
    pub department_progress: Vec<DepartmentProgress>,
    pub quarterly_insights: Vec<QuarterlyInsight>,
}

impl Dataset {
    pub fn seed() -> Self {
        Self {
            employees: employees(),
            notifications: notifications(),
            mentorships: mentorship_sessions(),
            feedback: feedback_entries(),
            department_analysis: department_analysis(),
            department_progress: department_progress(),
            quarterly_insights: quarterly_insights(),
        }
    }

    /// All development activities across the roster, in roster order.
    pub fn all_activities(&self) -> Vec<&Activity> {
        self.employees
            .iter()
            .flat_map(|e| e.current_activities.iter())
            .collect()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn gap(category: SkillCategory, current: u32, required: u32, gap: u32) -> CompetencyGap {
    CompetencyGap {
        category,
        current,
        required,
        gap,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Rajesh Kumar Singh".into(),
            department: "Transmission".into(),
            role: "Assistant GM".into(),
            target_role: "GM Operations".into(),
            idp_status: ProgressStatus::InProgress,
            adc_score: 85,
            email: "rajesh.singh@powergridindia.com".into(),
            experience_years: 12,
            location: "Northern Region".into(),
            competency_gaps: vec![
                gap(SkillCategory::Functional, 85, 92, 7),
                gap(SkillCategory::Leadership, 65, 88, 23),
                gap(SkillCategory::Geographic, 75, 85, 10),
            ],
            current_activities: vec![Activity {
                id: 1,
                title: "Advanced Grid Management Course".into(),
                kind: "Training".into(),
                status: ProgressStatus::InProgress,
                due_date: date(2024, 3, 15),
                progress: 60,
                impact: "Functional Skills +8 points".into(),
                priority: Priority::High,
            }],
        },
        Employee {
            id: 2,
            name: "Priya Sharma".into(),
            department: "Distribution".into(),
            role: "DGM".into(),
            target_role: "CGM".into(),
            idp_status: ProgressStatus::Completed,
            adc_score: 92,
            email: "priya.sharma@powergridindia.com".into(),
            experience_years: 15,
            location: "Southern Region".into(),
            competency_gaps: vec![
                gap(SkillCategory::Functional, 92, 95, 3),
                gap(SkillCategory::Leadership, 88, 95, 7),
                gap(SkillCategory::Geographic, 95, 90, 0),
            ],
            current_activities: vec![Activity {
                id: 2,
                title: "Executive Leadership Program".into(),
                kind: "Training".into(),
                status: ProgressStatus::Completed,
                due_date: date(2024, 1, 30),
                progress: 100,
                impact: "Leadership Skills +12 points".into(),
                priority: Priority::High,
            }],
        },
        Employee {
            id: 3,
            name: "Arun Verma".into(),
            department: "Corporate Planning".into(),
            role: "JGM".into(),
            target_role: "DGM".into(),
            idp_status: ProgressStatus::UnderReview,
            adc_score: 78,
            email: "arun.verma@powergridindia.com".into(),
            experience_years: 10,
            location: "Western Region".into(),
            competency_gaps: vec![
                gap(SkillCategory::Functional, 80, 88, 8),
                gap(SkillCategory::Leadership, 55, 82, 27),
                gap(SkillCategory::Geographic, 70, 85, 15),
            ],
            current_activities: vec![Activity {
                id: 3,
                title: "Strategic Planning Course".into(),
                kind: "Training".into(),
                status: ProgressStatus::Pending,
                due_date: date(2024, 4, 15),
                progress: 0,
                impact: "Functional Skills +10 points".into(),
                priority: Priority::Medium,
            }],
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            message: "5 IDP recommendations awaiting committee approval".into(),
            kind: NotificationKind::Warning,
            time: "2 hours ago".into(),
            priority: NotificationPriority::High,
            category: "Committee Action".into(),
        },
        Notification {
            id: 2,
            message: "Rajesh Kumar Singh completed Advanced Grid Management Course".into(),
            kind: NotificationKind::Success,
            time: "4 hours ago".into(),
            priority: NotificationPriority::Medium,
            category: "Achievement".into(),
        },
        Notification {
            id: 3,
            message: "2 high-potential employees require urgent development interventions".into(),
            kind: NotificationKind::Error,
            time: "1 day ago".into(),
            priority: NotificationPriority::High,
            category: "Development Gap".into(),
        },
    ]
}

pub fn pending_approvals() -> Vec<ApprovalRequest> {
    vec![ApprovalRequest {
        id: 1,
        employee_id: 3,
        employee_name: "Arun Verma".into(),
        request_type: "IDP Recommendation".into(),
        title: "Development Plan for DGM Role".into(),
        description: "AI-generated personalized development plan based on competency gap analysis"
            .into(),
        estimated_cost: 200_000,
        duration: "12-18 months".into(),
        priority: Priority::High,
        requested_date: date(2024, 1, 20),
        manager_note: "Critical successor position requiring immediate attention to leadership gaps"
            .into(),
        status: None,
        admin_comment: None,
    }]
}

pub fn mentorship_sessions() -> Vec<MentorshipSession> {
    vec![
        MentorshipSession {
            id: 1,
            mentor_name: "Shri A.K. Singh (ED Operations)".into(),
            mentee_name: "Rajesh Kumar Singh".into(),
            skill_focus: "Strategic Leadership & Operations".into(),
            start_date: date(2024, 1, 1),
            progress: 65,
            last_meeting: date(2024, 1, 25),
            next_meeting: date(2024, 2, 5),
            status: MentorshipStatus::Active,
        },
        MentorshipSession {
            id: 2,
            mentor_name: "Mrs. Meera Swarup (ED HR)".into(),
            mentee_name: "Priya Sharma".into(),
            skill_focus: "Executive Leadership".into(),
            start_date: date(2024, 1, 10),
            progress: 85,
            last_meeting: date(2024, 1, 28),
            next_meeting: date(2024, 2, 8),
            status: MentorshipStatus::Active,
        },
    ]
}

pub fn feedback_entries() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            id: 1,
            employee_id: 1,
            from_user: "Committee Feedback".into(),
            from_role: "Succession Planning Committee".into(),
            message: "Excellent progress on grid management competencies. Focus on multi-regional \
                      exposure for geographic skills development."
                .into(),
            timestamp: "2024-01-28 14:30".into(),
            kind: "committee_feedback".into(),
        },
        FeedbackEntry {
            id: 2,
            employee_id: 1,
            from_user: "Rajesh Kumar Singh".into(),
            from_role: "Employee".into(),
            message: "Completed Advanced Grid Management Course Module 5. Ready for practical \
                      field assignment."
                .into(),
            timestamp: "2024-01-28 16:45".into(),
            kind: "progress_update".into(),
        },
    ]
}

pub fn department_analysis() -> Vec<DepartmentAnalysis> {
    vec![
        DepartmentAnalysis {
            department: "Transmission".into(),
            total_employees: 12,
            with_idps: 10,
            avg_score: 82,
            top_skill_gap: "Leadership".into(),
            critical_successors: 3,
        },
        DepartmentAnalysis {
            department: "Distribution".into(),
            total_employees: 8,
            with_idps: 7,
            avg_score: 85,
            top_skill_gap: "Geographic".into(),
            critical_successors: 2,
        },
        DepartmentAnalysis {
            department: "Corporate Planning".into(),
            total_employees: 6,
            with_idps: 4,
            avg_score: 79,
            top_skill_gap: "Leadership".into(),
            critical_successors: 1,
        },
        DepartmentAnalysis {
            department: "Human Resources".into(),
            total_employees: 4,
            with_idps: 4,
            avg_score: 88,
            top_skill_gap: "Geographic".into(),
            critical_successors: 2,
        },
        DepartmentAnalysis {
            department: "Engineering".into(),
            total_employees: 10,
            with_idps: 6,
            avg_score: 76,
            top_skill_gap: "Functional".into(),
            critical_successors: 1,
        },
    ]
}

pub fn department_progress() -> Vec<DepartmentProgress> {
    vec![
        DepartmentProgress {
            department: "Transmission".into(),
            completed: 85,
            pending: 15,
            total: 12,
        },
        DepartmentProgress {
            department: "Distribution".into(),
            completed: 90,
            pending: 10,
            total: 8,
        },
        DepartmentProgress {
            department: "Corporate Planning".into(),
            completed: 70,
            pending: 30,
            total: 6,
        },
        DepartmentProgress {
            department: "Human Resources".into(),
            completed: 95,
            pending: 5,
            total: 4,
        },
        DepartmentProgress {
            department: "Engineering".into(),
            completed: 60,
            pending: 40,
            total: 10,
        },
    ]
}

pub fn quarterly_insights() -> Vec<QuarterlyInsight> {
    vec![
        QuarterlyInsight {
            quarter: "Q1 2024".into(),
            insight: "68% of identified successors show readiness gaps in leadership competencies"
                .into(),
            impact: Priority::High,
            recommendation: "Accelerate executive leadership development programs and senior \
                             mentorship initiatives"
                .into(),
        },
        QuarterlyInsight {
            quarter: "Q1 2024".into(),
            insight: "Geographic mobility constraints affecting 40% of high-potential employees"
                .into(),
            impact: Priority::Medium,
            recommendation: "Develop virtual cross-regional exposure programs and project-based \
                             rotations"
                .into(),
        },
        QuarterlyInsight {
            quarter: "Q1 2024".into(),
            insight: "AI recommendation system improved IDP effectiveness by 35%".into(),
            impact: Priority::High,
            recommendation: "Expand AI-driven competency gap analysis to all leadership levels"
                .into(),
        },
    ]
}
