use client::{KeyValueStore, MemoryStore};
use dioxus::prelude::*;
use shared_types::{ROLE_KEY, TOKEN_KEY};

/// `window.localStorage` behind the [`KeyValueStore`] trait.
///
/// Reads are served from an in-memory mirror filled once by [`LocalStorage::load`];
/// writes update the mirror and are pushed to the page through `eval`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    mirror: MemoryStore,
}

impl LocalStorage {
    /// Read the persisted session keys from the page.
    pub async fn load() -> Self {
        let mut mirror = MemoryStore::new();
        for key in [TOKEN_KEY, ROLE_KEY] {
            match read_item(key).await {
                Ok(Some(value)) => mirror.set(key, &value),
                Ok(None) => {}
                Err(e) => tracing::warn!(key, error = %e, "Failed to read localStorage"),
            }
        }
        Self { mirror }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.mirror.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.mirror.set(key, value);
        document::eval(&format!(
            "window.localStorage.setItem({}, {});",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove(&mut self, key: &str) {
        self.mirror.remove(key);
        document::eval(&format!(
            "window.localStorage.removeItem({});",
            js_string(key)
        ));
    }
}

async fn read_item(key: &str) -> Result<Option<String>, document::EvalError> {
    let script = format!("return window.localStorage.getItem({});", js_string(key));
    document::eval(&script).join::<Option<String>>().await
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
