//! Role tag and its normalization adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Prefix carried by every canonical role identifier.
pub const ROLE_PREFIX: &str = "ROLE_";

/// The closed set of roles known to the platform.
///
/// Roles are always rendered in canonical form (`ROLE_USER`, `ROLE_ADMIN`).
/// The backend may send either the bare word or the prefixed identifier;
/// [`Role::normalize`] accepts both.
///
/// # Example
///
/// ```
/// use codeforge_core::Role;
///
/// assert_eq!(Role::normalize("admin").unwrap(), Role::Admin);
/// assert_eq!(Role::normalize("ROLE_ADMIN").unwrap().as_str(), "ROLE_ADMIN");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Canonical string form of a raw role value.
    ///
    /// Case is folded to upper, then `ROLE_` is prepended unless already
    /// present. Applying this twice yields the same string as applying it once.
    pub fn canonicalize(raw: &str) -> String {
        let upper = raw.trim().to_ascii_uppercase();
        if upper.starts_with(ROLE_PREFIX) {
            upper
        } else {
            format!("{ROLE_PREFIX}{upper}")
        }
    }

    /// Canonicalize a raw role value and map it onto the known set.
    ///
    /// # Errors
    ///
    /// Returns an error for any role outside `ROLE_USER` / `ROLE_ADMIN`.
    pub fn normalize(raw: &str) -> Result<Self, Error> {
        match Self::canonicalize(raw).as_str() {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ADMIN" => Ok(Role::Admin),
            _ => Err(InvalidInputError::UnknownRole {
                value: raw.to_string(),
            }
            .into()),
        }
    }

    /// Returns the canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Role::normalize(&s).map_err(serde::de::Error::custom)
    }
}
