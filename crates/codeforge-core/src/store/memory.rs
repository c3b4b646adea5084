//! In-process credential slot.

use std::sync::{PoisonError, RwLock};

use crate::traits::CredentialStore;
use crate::types::Credential;
use crate::Result;

/// A credential slot that lives only as long as the process.
///
/// Useful for tests and for front ends that never persist.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a credential.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: RwLock::new(Some(credential)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, credential: &Credential) -> Result<()> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let store = MemoryCredentialStore::new();
        assert!(store.is_empty());

        let token = Credential::new("tok123").unwrap();
        store.set(&token).unwrap();
        assert_eq!(store.get(), Some(token));

        store.clear();
        assert!(store.get().is_none());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites_single_slot() {
        let store = MemoryCredentialStore::with_credential(Credential::new("old").unwrap());
        store.set(&Credential::new("new").unwrap()).unwrap();
        assert_eq!(store.get().unwrap().as_str(), "new");
    }
}
