//! Single-slot credential storage.

use crate::types::Credential;
use crate::Result;

/// Durable holder of at most one credential.
///
/// A flat slot, not a collection. Clearing and setting are idempotent, so
/// concurrent writers settle on last-write-wins.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credential, if any.
    fn get(&self) -> Option<Credential>;

    /// Replace the stored credential.
    fn set(&self, credential: &Credential) -> Result<()>;

    /// Empty the slot. After this returns, [`CredentialStore::get`] yields `None`.
    fn clear(&self);

    fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}
