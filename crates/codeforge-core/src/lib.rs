//! codeforge-core - Core types and traits for the CodeForge session layer.
//!
//! This crate holds everything the transport and the session state machine
//! agree on: the opaque [`Credential`], the closed [`Role`] tag, profile
//! types, the unified [`Error`], and the seam traits that let the session
//! layer run against a real backend or an in-process fake.

pub mod error;
pub mod store;
pub mod traits;
pub mod types;

pub use error::Error;
pub use store::MemoryCredentialStore;
pub use traits::{AuthApi, CredentialStore, EvictionListener, EvictionSource};
pub use types::{ApiUrl, Credential, LoginCredentials, RawProfile, Registration, Role, UserProfile};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
