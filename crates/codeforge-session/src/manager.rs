//! Session state machine.

use std::sync::{Arc, Weak};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use codeforge_core::{
    AuthApi, CredentialStore, Error, EvictionListener, EvictionSource, LoginCredentials,
    Registration, Result, UserProfile,
};

use crate::state::SessionState;

/// Owner of the single shared session state.
///
/// Built once by the composition root and cloned into every consumer;
/// clones share state. Transitions:
///
/// - [`initialize`](Self::initialize): `Uninitialized -> Loading ->
///   Authenticated | Anonymous`. Never fails outwardly.
/// - [`login`](Self::login): stores the new credential, then re-runs the
///   profile fetch. On failure before a credential arrives, state is untouched.
/// - [`logout`](Self::logout): synchronous, local, always ends `Anonymous`.
///
/// If the transport evicts the credential while the session believes it is
/// authenticated, the next read of [`state`](Self::state) reports `Anonymous`.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: Box<dyn AuthApi>,
    store: Arc<dyn CredentialStore>,
    state: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Create a session in the `Uninitialized` state.
    pub fn new<A>(api: A, store: Arc<dyn CredentialStore>) -> Self
    where
        A: AuthApi + 'static,
    {
        let (state, _) = watch::channel(SessionState::Uninitialized);
        Self {
            inner: Arc::new(SessionInner {
                api: Box::new(api),
                store,
                state,
            }),
        }
    }

    /// Subscribe to credential evictions announced by `source`.
    ///
    /// The source holds only a weak reference, so the transport never keeps
    /// a dropped session alive.
    pub fn watch_evictions(&self, source: &impl EvictionSource) {
        let listener: Weak<dyn EvictionListener> =
            Arc::downgrade(&self.inner) as Weak<dyn EvictionListener>;
        source.add_eviction_listener(listener);
    }

    /// Current state, after folding in any credential loss since the last read.
    pub fn state(&self) -> SessionState {
        self.reconcile();
        self.inner.state.borrow().clone()
    }

    /// Receive every subsequent state transition.
    ///
    /// A receiver outliving the view that created it is the consumer's
    /// concern; late transitions are still published.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.reconcile();
        self.inner.state.subscribe()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// True while the session has not reached a terminal state.
    pub fn is_loading(&self) -> bool {
        self.state().is_pending()
    }

    /// Resolve the session from the stored credential.
    ///
    /// Only the first call does any work. A call made while a resolution is
    /// in flight waits for it, so the returned state is always terminal.
    /// With no stored credential this makes no network call.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> SessionState {
        let started = self.inner.state.send_if_modified(|state| {
            if *state == SessionState::Uninitialized {
                *state = SessionState::Loading;
                true
            } else {
                false
            }
        });

        if !started {
            debug!("Session already initialized");
            let mut updates = self.subscribe();
            // The sender lives as long as `self`, so this cannot observe a close.
            let _ = updates.wait_for(|state| !state.is_pending()).await;
            return self.state();
        }

        self.resolve().await
    }

    /// Re-check the stored credential against the backend from any state.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> SessionState {
        self.inner.set(SessionState::Loading);
        self.resolve().await
    }

    /// Authenticate, store the credential, and load the profile.
    ///
    /// # Errors
    ///
    /// Surfaces authentication failures untouched; the session keeps its
    /// previous state and no credential is stored. If the credential is
    /// accepted but the profile fetch fails, the credential is cleared and
    /// the session ends `Anonymous`.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        let credentials = LoginCredentials::new(username, password);
        let credential = self.inner.api.authenticate(&credentials).await?;

        self.inner.store.set(&credential)?;
        self.inner.set(SessionState::Loading);

        self.load_profile().await
    }

    /// Create an account. Session state is not touched.
    #[instrument(skip(self, registration), fields(username = %registration.username()))]
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        self.inner.api.register(registration).await
    }

    /// Drop the credential and become `Anonymous`. No network call.
    pub fn logout(&self) {
        self.inner.store.clear();
        self.inner.set(SessionState::Anonymous);
        info!("Logged out");
    }

    async fn resolve(&self) -> SessionState {
        if self.inner.store.is_empty() {
            debug!("No stored credential");
            self.inner.set(SessionState::Anonymous);
        } else if let Err(err) = self.load_profile().await {
            debug!(error = %err, "Session resolved anonymous");
        }
        self.state()
    }

    /// Fetch and accept the profile for the stored credential.
    ///
    /// Every path leaves the state terminal.
    async fn load_profile(&self) -> Result<UserProfile> {
        let result = self
            .inner
            .api
            .fetch_profile()
            .await
            .and_then(UserProfile::from_raw);

        match result {
            Ok(profile) => {
                if self.inner.store.is_empty() {
                    // Logged out or evicted while the fetch was in flight.
                    self.inner.set(SessionState::Anonymous);
                    return Err(Error::Unauthorized {
                        message: "credential removed while the profile was loading".to_string(),
                    });
                }
                info!(username = %profile.username, role = %profile.role, "Session authenticated");
                self.inner.set(SessionState::Authenticated(profile.clone()));
                Ok(profile)
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch failed, clearing credential");
                self.inner.store.clear();
                self.inner.set(SessionState::Anonymous);
                Err(err)
            }
        }
    }

    fn reconcile(&self) {
        if self.inner.store.is_empty() && self.inner.collapse_if_authenticated() {
            info!("Credential no longer stored, session is now anonymous");
        }
    }
}

impl SessionInner {
    fn set(&self, next: SessionState) {
        self.state.send_replace(next);
    }

    /// `Authenticated -> Anonymous`; any other state is left alone.
    fn collapse_if_authenticated(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_authenticated() {
                *state = SessionState::Anonymous;
                true
            } else {
                false
            }
        })
    }
}

impl EvictionListener for SessionInner {
    fn credential_evicted(&self) {
        if self.collapse_if_authenticated() {
            info!("Credential evicted, session is now anonymous");
        }
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.inner.state.borrow())
            .field("credential", &"[REDACTED]")
            .finish()
    }
}
