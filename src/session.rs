use anyhow::{Context, Result};
use log::{info, warn};
use std::{fs, path::PathBuf};

use crate::models::{Identity, Role};

/// Key for the persisted identity entry, JSON `{email, role, name}`.
pub const SESSION_KEY: &str = "session-identity";
/// Key for the persisted theme entry, the bare string "dark" or "light".
pub const THEME_KEY: &str = "theme-preference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Holds the signed-in identity and theme flag, persisted as two flat
/// key-value entries under the storage directory. Absence of either entry
/// is a normal startup state (logged out, light theme); malformed entries
/// are discarded rather than crashing startup.
pub struct SessionStore {
    dir: PathBuf,
    identity: Option<Identity>,
    theme: Theme,
}

impl SessionStore {
    /// Open the store and restore whatever was persisted by the last run.
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create storage directory {}", dir.display()))?;

        let identity = match fs::read_to_string(dir.join(SESSION_KEY)) {
            Ok(contents) => match serde_json::from_str::<Identity>(&contents) {
                Ok(identity) => {
                    info!("Restored session for {}", identity.email);
                    Some(identity)
                }
                Err(err) => {
                    warn!("Discarding malformed {SESSION_KEY} entry: {err}");
                    None
                }
            },
            Err(_) => None,
        };

        let theme = match fs::read_to_string(dir.join(THEME_KEY)) {
            Ok(contents) => Theme::from_str(contents.trim()).unwrap_or_else(|| {
                warn!("Discarding malformed {THEME_KEY} entry");
                Theme::default()
            }),
            Err(_) => Theme::default(),
        };

        Ok(Self {
            dir,
            identity,
            theme,
        })
    }

    /// Construct and store an identity for the given credentials. There is
    /// no credential validation; any email signs in under the chosen role.
    pub fn login(&mut self, email: &str, role: Role) -> Result<Identity> {
        let identity = Identity::from_login(email, role);
        let serialized = serde_json::to_string_pretty(&identity)?;
        let path = self.dir.join(SESSION_KEY);
        fs::write(&path, serialized)
            .with_context(|| format!("failed to write session to {}", path.display()))?;
        info!("Logged in {} as {}", identity.email, role.as_str());
        self.identity = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the in-memory identity and remove the persisted entry.
    pub fn logout(&mut self) -> Result<()> {
        self.identity = None;
        let path = self.dir.join(SESSION_KEY);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove session at {}", path.display()))?;
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, persist it, and return the new value for the shell
    /// to apply.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        let path = self.dir.join(THEME_KEY);
        fs::write(&path, self.theme.as_str())
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn scratch_dir(tag: &str) -> PathBuf {
        let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "idp-core-session-{tag}-{}-{seq}",
            std::process::id()
        ))
    }

    #[test]
    fn login_persists_and_restores() {
        let dir = scratch_dir("restore");
        let mut store = SessionStore::new(dir.clone()).unwrap();
        store.login("jane.doe@x.com", Role::Manager).unwrap();

        let restored = SessionStore::new(dir.clone()).unwrap();
        let identity = restored.identity().unwrap();
        assert_eq!(identity.name, "Jane Doe");
        assert_eq!(identity.role, Role::Manager);
        assert!(restored.is_authenticated());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn logout_then_restart_is_logged_out() {
        let dir = scratch_dir("logout");
        let mut store = SessionStore::new(dir.clone()).unwrap();
        store.login("bob_smith@x.com", Role::Employee).unwrap();
        store.logout().unwrap();
        assert!(!store.is_authenticated());

        let restored = SessionStore::new(dir.clone()).unwrap();
        assert!(!restored.is_authenticated());
        assert!(restored.identity().is_none());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn malformed_session_entry_falls_back_to_logged_out() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SESSION_KEY), "{not json").unwrap();

        let store = SessionStore::new(dir.clone()).unwrap();
        assert!(!store.is_authenticated());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn theme_toggle_persists_across_restart() {
        let dir = scratch_dir("theme");
        let mut store = SessionStore::new(dir.clone()).unwrap();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);

        let restored = SessionStore::new(dir.clone()).unwrap();
        assert_eq!(restored.theme(), Theme::Dark);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn malformed_theme_entry_falls_back_to_light() {
        let dir = scratch_dir("badtheme");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(THEME_KEY), "sepia").unwrap();

        let store = SessionStore::new(dir.clone()).unwrap();
        assert_eq!(store.theme(), Theme::Light);

        fs::remove_dir_all(dir).ok();
    }
}
