//! codeforge-http - HTTP transport for the CodeForge session layer.
//!
//! [`HttpGateway`] is the single chokepoint every backend call passes
//! through. It attaches the stored credential as a bearer token, classifies
//! every response, and evicts the credential when the backend answers 401.
//! [`AuthClient`] maps the three auth operations onto the gateway.

mod auth;
mod envelope;
mod gateway;

pub use auth::{AuthClient, LOGIN_PATH, ME_PATH, REGISTER_PATH};
pub use gateway::{GatewayConfig, HttpGateway, Outcome, classify};
pub use reqwest::Method;
