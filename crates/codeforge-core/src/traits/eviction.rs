//! Credential eviction notifications.

use std::sync::Weak;

/// Receives a callback whenever the transport evicts the stored credential
/// after an authorization failure.
///
/// Called synchronously, after the store has been cleared and before the
/// failing call returns its error.
pub trait EvictionListener: Send + Sync {
    fn credential_evicted(&self);
}

/// Something that evicts credentials and announces it.
///
/// Listeners are held weakly; a dropped listener is skipped and pruned.
pub trait EvictionSource {
    fn add_eviction_listener(&self, listener: Weak<dyn EvictionListener>);
}
