use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    /// Exact match against the three role names; anything else is not a role.
    pub fn from_str(value: &str) -> Option<Role> {
        match value {
            "Admin" => Some(Role::Admin),
            "Manager" => Some(Role::Manager),
            "Employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

/// The signed-in user. `name` is always derived from `email`, never stored
/// independently, so re-logging with the same email reproduces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl Identity {
    pub fn from_login(email: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            role,
            name: display_name(email),
        }
    }
}

/// Derive a display name from the email local part: `.` and `_` become
/// spaces and each word is capitalized ("jane.doe@x.com" -> "Jane Doe").
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    local
        .split(['.', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Login shortcut shown on the sign-in screen. `name` is the label on the
/// button; the identity created by using the shortcut still derives its
/// display name from the email.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DemoAccount {
    pub email: &'static str,
    pub role: Role,
    pub name: &'static str,
}
