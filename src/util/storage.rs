//! Durable token persistence backed by `localStorage`.
//!
//! A single key holds the raw bearer token; absence means "no persisted
//! session". Requires a browser environment — on the server every function
//! is inert so SSR renders an anonymous shell.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "nestegg_token";

/// Read the persisted token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token. Completes synchronously; callers commit the in-memory
/// token only after this returns so a restart cannot lose it.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, token).is_err() {
                    leptos::logging::warn!("failed to persist session token");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
