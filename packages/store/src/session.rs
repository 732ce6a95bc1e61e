//! # Session — the stored bearer token behind a typed interface
//!
//! The only state this client persists between page loads is a single
//! bearer token, kept under the key [`TOKEN_KEY`] (`"token"`). All reads
//! and writes go through the [`TokenStore`] trait, so the same logic works
//! against the browser's `localStorage` ([`crate::BrowserStore`], web) or
//! an in-memory map ([`crate::MemoryStore`], native and tests).
//!
//! [`Session`] wraps a store in the accessors the rest of the workspace
//! uses: `token`, `set_token`, `clear_token`, `is_authenticated`. Presence
//! of a token is the sole client-side authorization gate — the backend is
//! trusted to reject invalid or expired tokens, which surfaces as a failed
//! call, not as anything the session tracks.
//!
//! Lifecycle: the token is written once on login and removed on logout.
//! There is no refresh or expiry bookkeeping.

/// Storage key for the session token. Shared across every page of the origin.
pub const TOKEN_KEY: &str = "token";

/// Interface for persisting and retrieving the session token.
///
/// `localStorage` is a synchronous API, so the trait is synchronous too.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// A session backed by a TokenStore.
#[derive(Clone, Debug)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Persist a freshly issued token (login).
    pub fn set_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Remove the stored token (logout).
    pub fn clear_token(&self) {
        self.store.clear();
    }

    /// Whether a token is present. Says nothing about its validity.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }
}
