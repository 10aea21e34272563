//! In-memory storage backend.
//! Volatile fallback for contexts without localStorage, and the
//! default double in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use plantai_core::ports::StoragePort;
use plantai_types::Result;

pub struct MemoryStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
