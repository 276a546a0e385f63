//! Auth session manager: login, signup, logout, and token rehydration.
//!
//! The manager is the only writer of the session store. Login commits a
//! token; the rehydration effect then validates it against `/users/me` and
//! either resolves the profile or signs the session out. Login and signup
//! failures propagate to the caller for display; rehydration failures are
//! handled entirely internally.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::SignupData;
use crate::state::session::SessionStore;

/// Failures surfaced by the auth operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("signup rejected: {0}")]
    Validation(String),
    #[error("session expired or invalid")]
    InvalidSession,
}

/// Orchestrates the session lifecycle over the store and the API client.
#[derive(Clone, Copy)]
pub struct AuthManager {
    store: SessionStore,
}

impl AuthManager {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Restore any persisted token and install the rehydration effect.
    ///
    /// The effect re-runs on every token or profile change: whenever a token
    /// is present without a resolved profile it validates the token against
    /// the backend. The epoch snapshot taken before the request guards
    /// against a logout or re-login that lands while the request is in
    /// flight.
    pub fn attach(self) {
        self.store.restore_persisted();

        Effect::new(move || {
            let Some(token) = self.store.token() else {
                return;
            };
            if self.store.profile().is_some() {
                return;
            }
            let epoch = self.store.epoch();
            leptos::task::spawn_local(async move {
                self.rehydrate(token, epoch).await;
            });
        });
    }

    /// Validate `token` against `/users/me` and settle the session.
    async fn rehydrate(self, token: String, epoch: u64) {
        match api::fetch_me(&token).await {
            Ok(profile) => {
                if !self.store.resolve_profile(profile, epoch) {
                    leptos::logging::log!("discarding stale rehydration response");
                }
            }
            Err(err) => {
                // Invalid token or unreachable backend: collapse the session
                // instead of leaving an unvalidated token around. A stale
                // failure (epoch moved on) belongs to a session that no
                // longer exists and is ignored.
                if self.store.epoch() == epoch {
                    leptos::logging::warn!("session rehydration failed, signing out: {err}");
                    self.store.clear_token();
                }
            }
        }
    }

    /// Exchange credentials for a bearer token and commit it to the store.
    /// On failure the store is left untouched.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` if the backend rejects the pair, `Network` if
    /// the request cannot complete.
    pub async fn login(self, username: &str, password: &str) -> Result<(), AuthError> {
        let token = api::login(username, password).await?;
        self.store.set_token(&token);
        Ok(())
    }

    /// Create an account. Never establishes a session — the caller directs
    /// the user to log in afterwards.
    ///
    /// # Errors
    ///
    /// `Validation` if the backend rejects the payload, `Network` if the
    /// request cannot complete.
    pub async fn signup(self, data: &SignupData) -> Result<(), AuthError> {
        api::signup(data).await
    }

    /// Clear the session locally. Infallible and idempotent: there is no
    /// server-side invalidation call to fail.
    pub fn logout(self) {
        self.store.clear_token();
    }
}
