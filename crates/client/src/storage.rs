use shared_types::{Session, ROLE_KEY, TOKEN_KEY};
use std::collections::HashMap;

/// Minimal string key/value storage, shaped like the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-process store used by tests and as the mirror behind browser storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Persists the session's token and role as two entries that are always
/// written together and removed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Persist both halves of a fresh login.
    pub fn set(&mut self, token: &str, role: &str) {
        self.backend.set(TOKEN_KEY, token);
        self.backend.set(ROLE_KEY, role);
    }

    /// Read the stored pair. Any non-empty token counts as signed in.
    pub fn get(&self) -> Session {
        Session::from_stored(self.backend.get(TOKEN_KEY), self.backend.get(ROLE_KEY))
    }

    pub fn clear(&mut self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(ROLE_KEY);
    }

    /// Persist whatever `session` holds; a logged-out session clears storage.
    pub fn save(&mut self, session: &Session) {
        match (session.token(), session.role()) {
            (Some(token), Some(role)) => self.set(token, role),
            (Some(token), None) => {
                self.backend.set(TOKEN_KEY, token);
                self.backend.remove(ROLE_KEY);
            }
            (None, _) => self.clear(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}
