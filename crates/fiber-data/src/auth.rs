//! Demo sign-in backed by the users shipped with the dataset.

use std::fmt;

use fiber_state::{Authenticator, Credentials, StateError, UserRole, UserSession};
use serde::Deserialize;
use tracing::debug;

/// A demo account from the dataset.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    password: String,
}

impl DemoUser {
    fn session(&self) -> UserSession {
        UserSession {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

impl fmt::Debug for DemoUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoUser")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Authenticator over a fixed list of demo accounts.
///
/// Emails compare case-insensitively, passwords exactly.
#[derive(Debug, Clone, Default)]
pub struct DemoAuthenticator {
    users: Vec<DemoUser>,
}

impl DemoAuthenticator {
    pub fn new(users: Vec<DemoUser>) -> Self {
        Self { users }
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> fiber_state::Result<UserSession> {
        let user = self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(credentials.email()))
            .filter(|user| user.password == credentials.password());
        match user {
            Some(user) => Ok(user.session()),
            None => {
                debug!(email = credentials.email(), "demo sign-in rejected");
                Err(StateError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fiber_state::Session;

    use super::*;

    fn authenticator() -> DemoAuthenticator {
        let users: Vec<DemoUser> = serde_json::from_str(
            r#"[{"email":"rina@fibertrack.id","displayName":"Rina","role":"supervisor","password":"secret"}]"#,
        )
        .unwrap();
        DemoAuthenticator::new(users)
    }

    #[test]
    fn email_match_ignores_case() {
        let session = authenticator()
            .authenticate(&Credentials::new("Rina@FiberTrack.id", "secret"))
            .unwrap();
        assert_eq!(session.display_name, "Rina");
        assert_eq!(session.role, UserRole::Supervisor);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let err = authenticator()
            .authenticate(&Credentials::new("rina@fibertrack.id", "Secret"))
            .unwrap_err();
        assert_eq!(err, StateError::InvalidCredentials);
    }

    #[test]
    fn unknown_email_leaves_session_anonymous() {
        let auth = authenticator();
        let mut session = Session::anonymous();
        assert!(
            session
                .sign_in(&auth, &Credentials::new("ghost@fibertrack.id", "secret"))
                .is_err()
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_hides_password() {
        let auth = authenticator();
        assert!(!format!("{auth:?}").contains("secret"));
    }
}
