//! Persisted credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for the bearer token: written on login, cleared
//! on logout, read by the request authorizer and the session bootstrap.
//! Lives in `localStorage` so a session survives page reloads. No network
//! or validation logic belongs here.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

/// localStorage key holding the bearer token.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "lostfound_token";

/// Read the persisted bearer token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a bearer token for subsequent requests and future app starts.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Erase the persisted bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
