//! Auth endpoints mapped onto the gateway.

use std::sync::Weak;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, info, instrument};

use codeforge_core::{
    AuthApi, Credential, Error, EvictionListener, EvictionSource, LoginCredentials, RawProfile,
    Registration, Result,
};

use crate::gateway::HttpGateway;

/// POST, body `{username, password}`, data `{token, username, role}`.
pub const LOGIN_PATH: &str = "/auth/login";

/// POST, body `{username, email, password}`.
pub const REGISTER_PATH: &str = "/auth/register";

/// GET, credential via header, data `{id, username, role}`.
pub const ME_PATH: &str = "/auth/me";

/// Payload of a successful login. Only the token is used.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Stateless client for the backend's auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: HttpGateway,
}

impl AuthClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Credential> {
        info!("Authenticating");

        let response: LoginResponse = self.gateway.post(LOGIN_PATH, credentials).await?;

        Credential::new(response.token).map_err(|_| Error::Decode {
            message: "login response carried an empty token".to_string(),
        })
    }

    #[instrument(skip(self, registration), fields(username = %registration.username()))]
    async fn register(&self, registration: &Registration) -> Result<()> {
        info!("Registering account");

        let _: IgnoredAny = self.gateway.post(REGISTER_PATH, registration).await?;

        debug!("Account created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<RawProfile> {
        debug!("Fetching current profile");
        self.gateway.get(ME_PATH).await
    }
}

impl EvictionSource for AuthClient {
    fn add_eviction_listener(&self, listener: Weak<dyn EvictionListener>) {
        self.gateway.add_eviction_listener(listener);
    }
}
