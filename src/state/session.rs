#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::util::storage;

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No token. Protected routes must redirect to login.
    Anonymous,
    /// A token exists but the backend has not confirmed it yet.
    /// Not sufficient to render protected content.
    PendingValidation,
    /// Token confirmed and profile resolved.
    Authenticated,
}

/// The (token, profile) pair plus an epoch counter for stale-response
/// guarding.
///
/// Every token mutation bumps the epoch. An async rehydration result carries
/// the epoch it was started under and is applied only if that epoch is still
/// current — which is what makes a logout win against an in-flight
/// `/users/me` response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    profile: Option<UserProfile>,
    epoch: u64,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match (&self.token, &self.profile) {
            (None, _) => SessionPhase::Anonymous,
            (Some(_), None) => SessionPhase::PendingValidation,
            (Some(_), Some(_)) => SessionPhase::Authenticated,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Install a freshly issued token. Any previously resolved profile is
    /// invalidated with it.
    pub fn commit_token(&mut self, token: String) {
        self.token = Some(token);
        self.profile = None;
        self.epoch += 1;
    }

    /// Drop token and profile. A no-op when the session is already empty,
    /// so a logout while anonymous does not invalidate anything.
    pub fn clear(&mut self) {
        if self.token.is_none() && self.profile.is_none() {
            return;
        }
        self.token = None;
        self.profile = None;
        self.epoch += 1;
    }

    /// Apply a resolved profile if `epoch` is still current and a token is
    /// present. Returns whether the profile was applied.
    pub fn resolve_profile(&mut self, profile: UserProfile, epoch: u64) -> bool {
        if epoch != self.epoch || self.token.is_none() {
            return false;
        }
        self.profile = Some(profile);
        true
    }

    /// Drop the profile while keeping the token. The session falls back to
    /// pending validation.
    pub fn clear_profile(&mut self) {
        self.profile = None;
    }
}

/// Reactive handle to the session, provided via context.
///
/// `Copy` like the other signal-backed state handles; copies share the same
/// underlying signal, so every consumer observes mutations synchronously.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_owned))
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.with(|s| s.profile().cloned())
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }

    /// Current epoch, read untracked: callers snapshot it before a network
    /// call, they do not subscribe to it.
    pub fn epoch(&self) -> u64 {
        self.state.with_untracked(SessionState::epoch)
    }

    /// Persist then commit a freshly issued token.
    ///
    /// The durable write happens before the in-memory commit so a restart
    /// cannot lose a token the app already considers committed.
    pub fn set_token(&self, token: &str) {
        storage::write_token(token);
        self.state.update(|s| s.commit_token(token.to_owned()));
    }

    /// Remove the token from durable storage and memory; drops any profile
    /// unconditionally.
    pub fn clear_token(&self) {
        storage::remove_token();
        self.state.update(SessionState::clear);
    }

    /// Load a token persisted by a previous process, without re-writing it.
    pub fn restore_persisted(&self) {
        if let Some(token) = storage::read_token() {
            self.state.update(|s| s.commit_token(token));
        }
    }

    /// Apply a rehydration result under the epoch guard. Returns whether the
    /// profile was applied.
    pub fn resolve_profile(&self, profile: UserProfile, epoch: u64) -> bool {
        let mut applied = false;
        self.state.update(|s| applied = s.resolve_profile(profile, epoch));
        applied
    }

    pub fn clear_profile(&self) {
        self.state.update(SessionState::clear_profile);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
