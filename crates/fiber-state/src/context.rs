//! Theme and session context handed to presentation code.
//!
//! Nothing here is global: the application builds an [`AppContext`] once and
//! passes it (or the parts it needs) to whatever renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StateError};

// =============================================================================
// THEME
// =============================================================================

/// Light/dark preference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl ThemeMode {
    /// All available modes for UI picker.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Lowercase name used by settings files and `--theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }

    /// Mode after pressing the theme toggle: the opposite of what is shown.
    pub fn toggled(&self, system_is_dark: bool) -> Self {
        if self.is_dark(system_is_dark) {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown theme mode: {s}")),
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Supervisor,
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Supervisor => "Field supervisor",
            Self::Viewer => "Viewer",
        }
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Surrounding whitespace is stripped from the email, not the password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Checks credentials against whatever identity source the deployment uses.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserSession>;
}

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserSession>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserSession> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Validate the form input, then ask `authenticator`.
    ///
    /// Empty fields fail with [`StateError::MissingCredentials`] without
    /// consulting the authenticator. On failure the session is unchanged.
    pub fn sign_in(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<&UserSession> {
        if !credentials.is_complete() {
            return Err(StateError::MissingCredentials);
        }
        let user = authenticator.authenticate(credentials)?;
        info!(email = %user.email, role = ?user.role, "signed in");
        Ok(self.user.insert(user))
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "signed out");
        }
    }
}

// =============================================================================
// APP CONTEXT
// =============================================================================

/// Explicit replacement for framework-provided theme and auth providers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppContext {
    pub theme: ThemeMode,
    /// OS preference, consulted when `theme` is [`ThemeMode::System`].
    pub system_is_dark: bool,
    pub session: Session,
}

impl AppContext {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_is_dark)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled(self.system_is_dark);
    }
}
