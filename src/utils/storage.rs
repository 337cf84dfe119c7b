use web_sys::{window, Storage};

use crate::error::AppError;

/// Raw string key/value persistence. The session service only ever talks to
/// this trait, so it can run against an in-memory map off the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// `None` without a window or when the browser blocks storage access
fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`. Unavailable storage reads as empty and refuses writes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = local_storage()
            .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write '{}' to localStorage", key)))
    }

    fn remove(&self, key: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("⚠️ localStorage unavailable, '{}' not removed", key);
            return;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("⚠️ Could not remove '{}' from localStorage", key);
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory stores standing in for localStorage in unit tests.

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::KeyValueStore;
    use crate::error::AppError;

    /// Shared between clones, so a test can inspect what a service wrote
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        /// Writes to this key fail, as a full or blocked storage would
        failing_key: Option<String>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_on(key: &str) -> Self {
            Self {
                failing_key: Some(key.to_string()),
                ..Self::default()
            }
        }

        pub fn keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.entries.borrow().keys().cloned().collect();
            keys.sort();
            keys
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            if self.failing_key.as_deref() == Some(key) {
                return Err(AppError::Storage(format!("could not write '{}'", key)));
            }
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    /// Storage the browser refuses entirely
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BlockedStore;

    impl KeyValueStore for BlockedStore {
        fn get(&self, _: &str) -> Option<String> {
            None
        }

        fn set(&self, _: &str, _: &str) -> Result<(), AppError> {
            Err(AppError::Storage("localStorage is unavailable".to_string()))
        }

        fn remove(&self, _: &str) {}
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        store.set("user", "{}").unwrap();
        store.set("accessToken", "abc").unwrap();

        let shared = store.clone();
        assert_eq!(shared.get("accessToken").as_deref(), Some("abc"));
        assert_eq!(shared.keys(), vec!["accessToken", "user"]);

        store.remove("user");
        assert_eq!(shared.get("user"), None);
    }

    #[test]
    fn failing_key_rejects_only_that_write() {
        let store = MemoryStore::failing_on("accessToken");
        assert!(store.set("user", "{}").is_ok());
        assert!(matches!(store.set("accessToken", "t"), Err(AppError::Storage(_))));
        assert_eq!(store.keys(), vec!["user"]);
    }
}
