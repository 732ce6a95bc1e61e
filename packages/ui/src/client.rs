//! Shared session and client constructors for all platforms.
//!
//! Returns a [`store::Session`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::BrowserStore`]
//! - **Native** (tests, future desktop shell): process-wide [`store::MemoryStore`]

/// Create a platform-appropriate session over the persisted token.
pub fn make_session() -> store::Session<impl store::TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::Session::new(store::MemoryStore::shared())
    }
}

/// Create a backend client carrying the stored bearer token, if any.
///
/// Built fresh at each call site so a handler always sees the token as it
/// is at that moment, not as it was when the page mounted.
pub fn make_client() -> api::Client {
    api::Client::new(api::API_URL).with_token(make_session().token())
}
