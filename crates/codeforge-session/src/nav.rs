//! Navigation bar selection.

use crate::state::SessionState;

/// Which navigation bar a signed-in user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    User,
    Admin,
}

impl NavVariant {
    /// `None` when nobody is signed in; no bar is shown.
    pub fn for_session(state: &SessionState) -> Option<Self> {
        let role = state.role()?;
        Some(if role.is_admin() {
            NavVariant::Admin
        } else {
            NavVariant::User
        })
    }
}
