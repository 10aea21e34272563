//! localStorage backend.
//! Durable per browser profile, which is exactly the persistence scope
//! the history window needs. The Web Storage API is synchronous; the
//! async port methods complete immediately.

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use plantai_core::ports::StoragePort;
use plantai_types::{Result, ServiceError};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ServiceError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ServiceError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // Fails when the origin quota is exhausted
        self.storage.set_item(key, value).map_err(js_error)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_error(e: JsValue) -> ServiceError {
    ServiceError::Storage(format!("{:?}", e))
}
