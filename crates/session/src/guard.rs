//! Authentication check behind protected routes.
//!
//! The guard reads the stored token and, when one exists, asks the
//! backend to verify it exactly once. It never navigates on its own:
//! callers render children on [`AuthState::Authenticated`] and send the
//! user to the login view on [`AuthState::Unauthenticated`].

use std::fmt::Display;

use web_types::ProfileResponse;

use crate::mount::Mount;
use crate::store::{Session, Storage};

/// Where a guarded view is in its authentication check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Verification in flight; show a loading indicator
    #[default]
    Checking,
    /// Token accepted; render the protected view
    Authenticated,
    /// No token, or verification failed; go to login
    Unauthenticated,
}

impl AuthState {
    /// State to render before any async work starts.
    ///
    /// Without a token the check is already decided, so the caller can
    /// redirect on first render and skip the network entirely.
    pub fn initial<S: Storage>(session: &Session<S>) -> Self {
        if session.token().is_some() {
            AuthState::Checking
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, AuthState::Checking)
    }
}

/// Backend call that confirms a bearer token is still valid.
#[allow(async_fn_in_trait)]
pub trait ProfileVerifier {
    type Error: Display;

    async fn verify_profile(&self, token: &str) -> Result<ProfileResponse, Self::Error>;
}

/// Once-per-mount session check.
pub struct Guard<S, V> {
    session: Session<S>,
    verifier: V,
}

impl<S: Storage, V: ProfileVerifier> Guard<S, V> {
    pub fn new(session: Session<S>, verifier: V) -> Self {
        Self { session, verifier }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Run the check and return its terminal state.
    ///
    /// Any failure clears the stored token. Transport errors and
    /// rejected credentials end the same way.
    pub async fn check(&self) -> AuthState {
        let Some(token) = self.session.token() else {
            log::debug!("No session token; treating user as signed out");
            return AuthState::Unauthenticated;
        };

        match self.verifier.verify_profile(&token).await {
            Ok(resp) if resp.is_verified() => {
                log::info!("Session token verified");
                AuthState::Authenticated
            }
            Ok(resp) => {
                log::warn!(
                    "Session token rejected: {}",
                    resp.message.as_deref().unwrap_or("success flag not set")
                );
                self.reject()
            }
            Err(e) => {
                log::warn!("Session verification failed: {e}");
                self.reject()
            }
        }
    }

    /// Like [`Guard::check`], but only hands the result to `apply` if
    /// `mount` is still live when verification finishes.
    ///
    /// Storage side effects happen either way.
    pub async fn check_mounted(&self, mount: &Mount, apply: impl FnOnce(AuthState)) -> AuthState {
        let state = self.check().await;
        if !mount.deliver(state, apply) {
            log::debug!("Guard unmounted before verification finished; dropping {state:?}");
        }
        state
    }

    fn reject(&self) -> AuthState {
        self.session.clear_token();
        AuthState::Unauthenticated
    }
}
