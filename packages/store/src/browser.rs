//! # localStorage token store — browser-side persistence
//!
//! [`BrowserStore`] is the [`TokenStore`] implementation used on the
//! **web platform**. It keeps the bearer token in the browser's
//! `localStorage` under [`TOKEN_KEY`], so the session survives reloads and
//! is shared by every page of the origin.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). An unavailable `localStorage` degrades to
//! "not logged in" rather than crashing the page; the backend remains the
//! authority on whether a token is any good.

use crate::session::{TokenStore, TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the window handle is looked up on every
/// operation.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
