use std::sync::{Arc, Mutex, OnceLock};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared instance, so every `Session` created during a
    /// native run sees the same token (the role `localStorage` plays on web).
    pub fn shared() -> Self {
        static SHARED: OnceLock<MemoryStore> = OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn fresh_store_is_unauthenticated() {
        let session = Session::new(MemoryStore::new());
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_then_get_round_trips() {
        let session = Session::new(MemoryStore::new());
        session.set_token("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn set_overwrites_previous_token() {
        let session = Session::new(MemoryStore::new());
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn clear_removes_token() {
        let session = Session::new(MemoryStore::new());
        session.set_token("abc123");
        session.clear_token();
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let a = Session::new(store.clone());
        let b = Session::new(store);
        a.set_token("shared");
        assert_eq!(b.token().as_deref(), Some("shared"));
        b.clear_token();
        assert!(a.token().is_none());
    }
}
