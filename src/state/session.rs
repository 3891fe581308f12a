//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `RwSignal<SessionState>` as context; route guards and
//! user-aware components read it, and the operations below are the only
//! writers. The persisted credential lives in `util::token`; this module
//! owns the in-memory session and its lifecycle:
//!
//! - `bootstrap`: one-time start-of-app resolution of a persisted token.
//! - `login` / `logout`: explicit transitions driven by the user.
//!
//! Authentication is judged by a validated profile, never by token
//! presence alone: a stored token may be stale or rejected by the server.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::error::ApiError;
use crate::net::types::{Role, UserProfile};
use crate::util::token;

/// Shared session state.
///
/// Fields are private so every mutation flows through the transition
/// methods, which maintain the `epoch` counter. Each async resolution
/// captures the epoch it started from; a resolution whose epoch is no
/// longer current lost a race with a newer session mutation and is
/// discarded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user: Option<UserProfile>,
    loading: bool,
    epoch: u64,
}

impl SessionState {
    /// The validated user, if the session is authenticated.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Whether a token resolution is still in flight. Protected routes
    /// defer their render decision while this is set.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Central capability resolution; views and the route guard consume
    /// this instead of comparing role strings themselves.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserProfile::role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.user_id)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Enter the validating state; returns the epoch an in-flight
    /// resolution must present to [`SessionState::resolve`].
    pub fn begin_loading(&mut self) -> u64 {
        self.loading = true;
        self.epoch += 1;
        self.epoch
    }

    /// Complete a resolution started at `epoch`. Returns `false` (and
    /// changes nothing) when a newer mutation superseded it.
    pub fn resolve(&mut self, epoch: u64, user: Option<UserProfile>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.user = user;
        self.loading = false;
        self.epoch += 1;
        true
    }

    /// Reset to the unauthenticated state unconditionally.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
        self.epoch += 1;
    }
}

/// One-time start-of-app session resolution.
///
/// With no persisted credential this is synchronous and network-free:
/// `loading` stays `false` and the visitor is simply unauthenticated.
/// With a credential, `loading` is raised until `/auth/me` settles; a
/// definitive 401 also purges the stale credential so the next start
/// does not re-fail the same validation.
pub fn bootstrap(session: RwSignal<SessionState>) {
    if token::load().is_none() {
        return;
    }
    let mut epoch = 0;
    session.update(|s| epoch = s.begin_loading());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let resolved = match auth::fetch_current_user().await {
            Ok(profile) => Some(profile),
            Err(err) => {
                if err.is_unauthorized() {
                    token::clear();
                }
                log::debug!("session bootstrap failed: {err}");
                None
            }
        };
        session.update(|s| {
            s.resolve(epoch, resolved);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    session.update(|s| {
        s.resolve(epoch, None);
    });
}

/// Exchange credentials for a session.
///
/// The token write completes before the profile fetch starts, and the
/// profile fetch settles before this returns, so a caller seeing `Ok`
/// always observes a fully authenticated session. A failed exchange
/// leaves any prior session untouched; a failed profile fetch after the
/// exchange clears the just-stored token and reports the login failed.
///
/// # Errors
///
/// Returns the [`ApiError`] whose `Display` text carries the
/// user-visible reason.
pub async fn login(
    session: RwSignal<SessionState>,
    roll_number: &str,
    password: &str,
) -> Result<(), ApiError> {
    let tokens = auth::login(roll_number, password).await?;
    token::store(&tokens.access_token);
    let epoch = session.with_untracked(SessionState::epoch);
    match auth::fetch_current_user().await {
        Ok(profile) => {
            // A logout that raced the fetch wins; the late profile is dropped.
            session.update(|s| {
                s.resolve(epoch, Some(profile));
            });
            Ok(())
        }
        Err(err) => {
            token::clear();
            session.update(|s| {
                s.resolve(epoch, None);
            });
            Err(err)
        }
    }
}

/// Drop the credential and the in-memory session. Side-effect only; no
/// network call, cannot fail.
pub fn logout(session: RwSignal<SessionState>) {
    token::clear();
    session.update(SessionState::clear);
}
