//! The transport chokepoint for every backend call.

use std::sync::{Arc, PoisonError, RwLock, Weak};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace, warn};

use codeforge_core::error::InvalidInputError;
use codeforge_core::{ApiUrl, CredentialStore, Error, EvictionListener, EvictionSource, Result};

use crate::envelope::{ApiEnvelope, ErrorBody};

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: ApiUrl,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GatewayConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: ApiUrl::default(),
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: concat!("codeforge/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Classification of an HTTP response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Unauthorized,
    ClientError,
    ServerError,
}

/// Classify a response status. Anything neither 2xx nor 4xx is treated as
/// a server fault, including stray 1xx/3xx that survive redirect handling.
pub fn classify(status: StatusCode) -> Outcome {
    if status.is_success() {
        Outcome::Success
    } else if status == StatusCode::UNAUTHORIZED {
        Outcome::Unauthorized
    } else if status.is_client_error() {
        Outcome::ClientError
    } else {
        Outcome::ServerError
    }
}

/// HTTP gateway shared by every caller that talks to the backend.
///
/// Outbound, it attaches `Authorization: Bearer <credential>` whenever the
/// store holds one. Inbound, it classifies the response; on 401 it clears
/// the store and notifies eviction listeners before returning
/// [`Error::Unauthorized`]. It never decides where the user goes next.
///
/// Cheap to clone; clones share the client, store, and listener list.
#[derive(Clone)]
pub struct HttpGateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    base_url: ApiUrl,
    store: Arc<dyn CredentialStore>,
    listeners: RwLock<Vec<Weak<dyn EvictionListener>>>,
}

impl HttpGateway {
    /// Create a gateway reading credentials from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: GatewayConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| InvalidInputError::Other {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            inner: Arc::new(GatewayInner {
                client,
                base_url: config.base_url,
                store,
                listeners: RwLock::new(Vec::new()),
            }),
        })
    }

    /// Returns the API base URL this gateway is configured for.
    pub fn base_url(&self) -> &ApiUrl {
        &self.inner.base_url
    }

    /// GET `path` and decode the envelope's `data`.
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send::<(), R>(Method::GET, path, None).await
    }

    /// POST a JSON body to `path` and decode the envelope's `data`.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body to `path` and decode the envelope's `data`.
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// DELETE `path` and decode the envelope's `data`.
    pub async fn delete<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send::<(), R>(Method::DELETE, path, None).await
    }

    /// Send a request through the gateway.
    ///
    /// Every verb helper funnels through here, so credential attachment and
    /// response classification happen in exactly one place.
    #[instrument(skip(self, body), fields(base = %self.inner.base_url))]
    pub async fn send<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.inner.base_url.endpoint(path);
        debug!(%method, path, "API request");

        let mut request = self
            .inner
            .client
            .request(method.clone(), &url)
            .headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            warn!(%method, path, error = %err, "no response from backend");
            transport_error(err)
        })?;

        self.handle_response(response).await
    }

    /// Default headers plus the bearer credential, when one is stored.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(credential) = self.inner.store.get() {
            match HeaderValue::from_str(&credential.bearer()) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("stored credential is not a valid header value, sending unauthenticated"),
            }
        }

        headers
    }

    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        let outcome = classify(status);
        if outcome == Outcome::Success {
            let bytes = response.bytes().await.map_err(transport_error)?;
            return decode_data(&bytes);
        }

        let message = error_message(response).await;
        match outcome {
            Outcome::Unauthorized => {
                self.evict();
                Err(Error::Unauthorized { message })
            }
            Outcome::ClientError => Err(Error::ClientError {
                status: status.as_u16(),
                message,
            }),
            _ => Err(Error::ServerError {
                status: status.as_u16(),
                message,
            }),
        }
    }

    /// Clear the stored credential, then tell every live listener.
    fn evict(&self) {
        warn!("401 Unauthorized, evicting stored credential");
        self.inner.store.clear();

        let listeners: Vec<Arc<dyn EvictionListener>> = {
            let mut guard = self
                .inner
                .listeners
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            guard.retain(|listener| listener.strong_count() > 0);
            guard.iter().filter_map(Weak::upgrade).collect()
        };

        for listener in listeners {
            listener.credential_evicted();
        }
    }
}

impl EvictionSource for HttpGateway {
    fn add_eviction_listener(&self, listener: Weak<dyn EvictionListener>) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.inner.base_url)
            .field("store", &"[REDACTED]")
            .finish()
    }
}

/// Unwrap `data` from a success body. An empty body decodes as JSON `null`.
fn decode_data<R: DeserializeOwned>(bytes: &[u8]) -> Result<R> {
    if bytes.is_empty() {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    let ApiEnvelope { message, data } = serde_json::from_slice(bytes)?;
    serde_json::from_value(data).map_err(|err| Error::Decode {
        message: match message.filter(|m| !m.is_empty()) {
            Some(context) => format!("{err} (backend message: {context})"),
            None => err.to_string(),
        },
    })
}

async fn error_message(response: reqwest::Response) -> String {
    let reason = response
        .status()
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();

    match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
            .unwrap_or_default()
            .describe(&reason),
        Err(_) => reason,
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };
    Error::NetworkUnavailable { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_statuses() {
        assert_eq!(classify(StatusCode::OK), Outcome::Success);
        assert_eq!(classify(StatusCode::CREATED), Outcome::Success);
        assert_eq!(classify(StatusCode::UNAUTHORIZED), Outcome::Unauthorized);
        assert_eq!(classify(StatusCode::BAD_REQUEST), Outcome::ClientError);
        assert_eq!(classify(StatusCode::FORBIDDEN), Outcome::ClientError);
        assert_eq!(classify(StatusCode::NOT_FOUND), Outcome::ClientError);
        assert_eq!(classify(StatusCode::INTERNAL_SERVER_ERROR), Outcome::ServerError);
        assert_eq!(classify(StatusCode::BAD_GATEWAY), Outcome::ServerError);
    }

    #[test]
    fn decode_data_unwraps_envelope() {
        let value: serde_json::Value =
            decode_data(br#"{"success":true,"message":"ok","data":{"token":"t"}}"#).unwrap();
        assert_eq!(value["token"], "t");
    }

    #[test]
    fn decode_data_empty_body_is_unit() {
        decode_data::<()>(b"").unwrap();
        let ignored: serde_json::Value = decode_data(b"").unwrap();
        assert!(ignored.is_null());
    }

    #[test]
    fn decode_data_missing_payload_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Needed {
            #[allow(dead_code)]
            id: i64,
        }
        let err = decode_data::<Needed>(br#"{"success":true,"message":"Problem list"}"#).unwrap_err();
        let message = match err {
            Error::Decode { message } => message,
            other => panic!("expected decode error, got {other:?}"),
        };
        assert!(message.contains("backend message: Problem list"));

        let err = decode_data::<Needed>(br#"{"success":true,"data":{}}"#).unwrap_err();
        let message = match err {
            Error::Decode { message } => message,
            other => panic!("expected decode error, got {other:?}"),
        };
        assert!(!message.contains("backend message"));
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("codeforge/"));
    }
}
