//! Logic core of the IDP (Individual Development Plan) dashboard: session
//! and theme state, role-keyed navigation and routing, derived statistics
//! over the in-memory dataset, and the approval lifecycle. The rendering
//! shell is an external collaborator; it displays what this crate computes
//! and feeds user actions back in.

pub mod approvals;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod models;
pub mod nav;
pub mod session;

pub use approvals::ApprovalQueue;
pub use dataset::{Dataset, DEMO_ACCOUNTS};
pub use error::Error;
pub use nav::{menu_for, resolve, resolve_slug, MenuItem, Page, View};
pub use session::{SessionStore, Theme};

use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::models::{DemoAccount, Identity};

/// Initialize logging (reads RUST_LOG env var, defaults to Info).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Explicit application context, constructed once at startup and threaded
/// through the shell instead of living in ambient globals. Dropping it is
/// the teardown; all durable state is already on disk by then.
pub struct App {
    pub session: SessionStore,
    pub approvals: ApprovalQueue,
    pub data: Dataset,
}

impl App {
    /// Build the context: open the session store (restoring any persisted
    /// identity and theme) and seed the in-memory collections.
    pub fn bootstrap(storage_dir: PathBuf) -> Result<Self> {
        let session = SessionStore::new(storage_dir)?;
        let data = Dataset::seed();
        let approvals = ApprovalQueue::new(dataset::pending_approvals());

        info!(
            "IDP core ready: {} employees, {} pending approvals{}",
            data.employees.len(),
            approvals.pending().len(),
            match session.identity() {
                Some(identity) => format!(", session restored for {}", identity.email),
                None => String::new(),
            }
        );

        Ok(Self {
            session,
            approvals,
            data,
        })
    }

    /// Sign in through one of the demo shortcuts.
    pub fn demo_login(&mut self, account: &DemoAccount) -> Result<Identity> {
        self.session.login(account.email, account.role)
    }

    /// Navigation menu for the signed-in user; empty when logged out.
    pub fn menu(&self) -> &'static [MenuItem] {
        match self.session.identity() {
            Some(identity) => nav::menu_for(identity.role),
            None => &[],
        }
    }

    /// Resolve a page for the signed-in user. `None` means there is no user
    /// and the shell should show the login screen instead.
    pub fn view_for(&self, page: Page) -> Option<View> {
        self.session
            .identity()
            .map(|identity| nav::resolve(identity.role, page))
    }
}
