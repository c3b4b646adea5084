//! User profile as reported by the backend and as held in session state.

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::role::Role;

/// Profile payload exactly as the backend returns it from `/auth/me`.
///
/// The role is still a raw string here; it becomes a [`Role`] only when
/// the profile is accepted into session state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawProfile {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// The authenticated user, derived from a profile fetch.
///
/// Never persisted; always re-derived from the current credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl UserProfile {
    /// Accept a raw profile, normalizing its role.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is outside the known set.
    pub fn from_raw(raw: RawProfile) -> Result<Self, Error> {
        let role = Role::normalize(&raw.role)?;
        Ok(Self {
            id: raw.id,
            username: raw.username,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_normalizes_role() {
        let raw = RawProfile {
            id: 1,
            username: "alice".into(),
            role: "admin".into(),
        };
        let profile = UserProfile::from_raw(raw).unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.role.as_str(), "ROLE_ADMIN");
        assert_eq!(profile.username, "alice");
    }

    #[test]
    fn from_raw_rejects_unknown_role() {
        let raw = RawProfile {
            id: 7,
            username: "mallory".into(),
            role: "ROLE_ROOT".into(),
        };
        assert!(UserProfile::from_raw(raw).is_err());
    }

    #[test]
    fn raw_profile_decodes_wire_shape() {
        let raw: RawProfile =
            serde_json::from_str(r#"{"id":3,"username":"bob","role":"ROLE_USER"}"#).unwrap();
        assert_eq!(raw.id, 3);
        assert_eq!(raw.role, "ROLE_USER");
    }
}
