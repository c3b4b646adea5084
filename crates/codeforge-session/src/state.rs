//! Session state.

use serde::Serialize;

use codeforge_core::{Role, UserProfile};

/// Where the session currently stands.
///
/// `Authenticated` implies the credential store holds a credential;
/// `Anonymous` implies it is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    /// Process start, before anyone asked.
    #[default]
    Uninitialized,
    /// A profile fetch is in flight.
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// True until initialization has resolved to a terminal state.
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Uninitialized | SessionState::Loading)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|profile| profile.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserProfile {
        UserProfile {
            id: 1,
            username: "alice".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn accessors() {
        let state = SessionState::Authenticated(alice());
        assert!(state.is_authenticated());
        assert!(!state.is_pending());
        assert_eq!(state.role(), Some(Role::Admin));

        assert!(SessionState::Loading.is_pending());
        assert!(SessionState::Uninitialized.is_pending());
        assert_eq!(SessionState::Anonymous.user(), None);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(SessionState::Authenticated(alice())).unwrap();
        assert_eq!(json["status"], "authenticated");
        assert_eq!(json["user"]["role"], "ROLE_ADMIN");

        let json = serde_json::to_value(SessionState::Anonymous).unwrap();
        assert_eq!(json["status"], "anonymous");
    }
}
