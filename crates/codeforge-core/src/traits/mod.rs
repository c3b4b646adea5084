//! Seam traits between the session layer, the transport, and storage.

mod auth_api;
mod credential_store;
mod eviction;

pub use auth_api::AuthApi;
pub use credential_store::CredentialStore;
pub use eviction::{EvictionListener, EvictionSource};
