//! Durable key-value persistence for the two page preferences.
//!
//! Values are stored as plain strings. Writes are best-effort: when the
//! browser refuses access (private mode, quota, sandboxed iframe) the
//! preference simply does not survive a reload.

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string store used by the theme and language stores.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The platform's durable store: `localStorage` on the web, a per-thread map
/// elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

/// `window.localStorage`, or `None` when there is no window or the browser
/// denies access. Both methods below degrade to a no-op in that case.
#[cfg(target_arch = "wasm32")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        browser_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let stored = browser_storage().is_some_and(|storage| storage.set_item(key, value).is_ok());
        if !stored {
            dioxus::logger::tracing::debug!("[storage] could not persist {key}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HOST_STORE: MemoryStore = MemoryStore::default();
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        HOST_STORE.with(|store| store.get(key))
    }

    fn set(&self, key: &str, value: &str) {
        HOST_STORE.with(|store| store.set(key, value));
    }
}

/// In-memory store, used on the host and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
