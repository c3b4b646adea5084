//! codeforge-session - Session state machine and route guards.
//!
//! A [`SessionManager`] is created once by the composition root and handed
//! to every consumer. It decides whether the visitor is authenticated and
//! with which [`Role`](codeforge_core::Role); [`Guard`]s turn that state
//! into render or redirect decisions without another backend call.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use codeforge_core::{CredentialStore, MemoryCredentialStore};
//! use codeforge_http::{AuthClient, GatewayConfig, HttpGateway};
//! use codeforge_session::{GuardDecision, RouteTable, SessionManager};
//!
//! # async fn example() -> Result<(), codeforge_core::Error> {
//! let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
//! let gateway = HttpGateway::new(GatewayConfig::default(), store.clone())?;
//! let client = AuthClient::new(gateway.clone());
//!
//! let session = SessionManager::new(client, store);
//! session.watch_evictions(&gateway);
//! session.initialize().await;
//!
//! let routes = RouteTable::codeforge();
//! match routes.decide("/admin/problems", &session.state()) {
//!     Some(GuardDecision::Render) => println!("welcome, admin"),
//!     Some(GuardDecision::Redirect(to)) => println!("redirect to {to}"),
//!     Some(GuardDecision::Placeholder) => println!("Loading..."),
//!     None => println!("no such page"),
//! }
//! # Ok(())
//! # }
//! ```

mod guard;
mod manager;
mod nav;
mod routes;
mod state;

pub use guard::{DEFAULT_LANDING_PATH, Guard, GuardDecision, LOGIN_PATH};
pub use manager::SessionManager;
pub use nav::NavVariant;
pub use routes::{Route, RouteTable};
pub use state::SessionState;
