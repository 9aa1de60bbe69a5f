use client::SessionStore;
use dioxus::prelude::*;
use shared_types::Session;

use crate::browser_store::LocalStorage;

/// The signed-in session shared by every route.
///
/// Views read an immutable [`Session`] snapshot; only [`SessionContext::login`]
/// and [`SessionContext::logout`] replace it, and both write through to
/// browser storage first.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: Signal<Session>,
    store: Signal<SessionStore<LocalStorage>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::logged_out()),
            store: Signal::new(SessionStore::new(LocalStorage::default())),
        }
    }

    /// Snapshot of the current session. Subscribes the caller to changes.
    pub fn current(&self) -> Session {
        self.session.read().clone()
    }

    /// Adopt whatever was persisted by a previous visit.
    pub fn restore(&mut self, store: SessionStore<LocalStorage>) {
        let session = store.get();
        tracing::info!(
            authenticated = session.is_authenticated(),
            "Restored session from storage"
        );
        self.store.set(store);
        self.session.set(session);
    }

    pub fn login(&mut self, token: &str, role: &str) {
        self.store.write().set(token, role);
        self.session.set(Session::login(token, role));
    }

    pub fn logout(&mut self) {
        self.store.write().clear();
        self.session.set(Session::logged_out());
        tracing::info!("Signed out");
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
