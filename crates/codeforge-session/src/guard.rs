//! Render-time access policies.

use codeforge_core::Role;

use crate::manager::SessionManager;
use crate::state::SessionState;

/// Login entry point for anonymous visitors.
pub const LOGIN_PATH: &str = "/login";

/// Where an authenticated user lacking the required role is sent.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// What a guarded view should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the guarded content.
    Render,
    /// Show a neutral waiting placeholder; the session is still resolving.
    Placeholder,
    /// Navigate away, replacing the current history entry.
    Redirect(&'static str),
}

/// Access policy attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// No restriction.
    Public,
    /// Any authenticated user.
    Authenticated,
    /// Authenticated with exactly this role.
    Role(Role),
}

impl Guard {
    /// Evaluate the policy against a session snapshot.
    ///
    /// Pending states never redirect, so a reload does not bounce the user
    /// to the login page before the stored credential has been checked.
    pub fn evaluate(&self, state: &SessionState) -> GuardDecision {
        if *self == Guard::Public {
            return GuardDecision::Render;
        }

        match state {
            SessionState::Uninitialized | SessionState::Loading => GuardDecision::Placeholder,
            SessionState::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
            SessionState::Authenticated(profile) => match self {
                Guard::Role(required) if profile.role != *required => {
                    GuardDecision::Redirect(DEFAULT_LANDING_PATH)
                }
                _ => GuardDecision::Render,
            },
        }
    }

    /// Evaluate against the live session, folding in any eviction first.
    pub fn check(&self, session: &SessionManager) -> GuardDecision {
        self.evaluate(&session.state())
    }
}
