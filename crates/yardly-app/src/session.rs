use serde::{Deserialize, Serialize};

/// Access level attached to a session. Admins can delete posts from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

/// Per-session state the original kept in ambient app context. Here it is an
/// explicit value handed to the operations that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub theme: Theme,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            username: "Guest".into(),
            role: Role::User,
            theme: Theme::Light,
        }
    }
}

impl Session {
    /// New session seeded from the system color scheme when the platform
    /// reports one.
    pub fn new(username: impl Into<String>, system_theme: Option<Theme>) -> Self {
        Self {
            username: username.into(),
            role: Role::User,
            theme: system_theme.unwrap_or(Theme::Light),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Flip between user and admin mode.
    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Admin => Role::User,
            Role::User => Role::Admin,
        };
    }

    /// Cycle light -> dark -> system -> light.
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        };
    }
}
