use std::{collections::HashMap, sync::Mutex};

use crate::domain::repositories::key_value_storage::KeyValueStorage;

/// `localStorage` stand-in backed by a map.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut items = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut items)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) {
        self.with_items(|items| items.insert(key.to_string(), value.to_string()));
    }

    fn remove_item(&self, key: &str) {
        self.with_items(|items| items.remove(key));
    }

    fn clear(&self) {
        self.with_items(|items| items.clear());
    }
}
