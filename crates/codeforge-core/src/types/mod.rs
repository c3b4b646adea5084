//! Validated types shared by the transport and the session layer.

mod api_url;
mod credential;
mod forms;
mod profile;
mod role;

pub use api_url::ApiUrl;
pub use credential::Credential;
pub use forms::{LoginCredentials, Registration};
pub use profile::{RawProfile, UserProfile};
pub use role::{ROLE_PREFIX, Role};
