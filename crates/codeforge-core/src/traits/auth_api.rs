//! Backend authentication operations.

use async_trait::async_trait;

use crate::types::{Credential, LoginCredentials, RawProfile, Registration};
use crate::Result;

/// Stateless request/response mapping onto the backend's auth endpoints.
///
/// Implementations retain no session state. Attaching the credential to
/// [`AuthApi::fetch_profile`] is the transport's job, not the caller's.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a username and password for a credential.
    ///
    /// Fails with `Unauthorized` on bad credentials and `NetworkUnavailable`
    /// when no response arrives.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Credential>;

    /// Create an account. Does not establish a session.
    async fn register(&self, registration: &Registration) -> Result<()>;

    /// Fetch the profile belonging to the currently stored credential.
    async fn fetch_profile(&self) -> Result<RawProfile>;
}
