//! Composition root.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use codeforge_http::{AuthClient, GatewayConfig, HttpGateway};
use codeforge_session::SessionManager;

use crate::cli::GlobalArgs;
use crate::storage::{self, FileCredentialStore};

/// The wired-up session layer for one invocation.
pub struct App {
    pub session: SessionManager,
    pub gateway: HttpGateway,
    pub store: Arc<FileCredentialStore>,
}

impl App {
    pub fn build(args: &GlobalArgs) -> Result<Self> {
        let config = GatewayConfig::new(args.api_url.clone()).with_timeout(Duration::from_secs(args.timeout_secs));

        let path = match &args.store {
            Some(path) => path.clone(),
            None => storage::default_path()?,
        };
        let store = Arc::new(FileCredentialStore::open(path)?);

        let gateway = HttpGateway::new(config, store.clone()).context("Failed to build gateway")?;
        let session = SessionManager::new(AuthClient::new(gateway.clone()), store.clone());
        session.watch_evictions(&gateway);

        Ok(Self {
            session,
            gateway,
            store,
        })
    }
}
