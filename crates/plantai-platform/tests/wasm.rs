//! WASM-target tests for plantai-platform (Node.js runtime).
//!
//! Tests MemoryStorage and the HistoryStore wiring under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! LocalStorage and HttpServiceClient need a browser window and are
//! exercised there, not under Node.

use std::rc::Rc;

use wasm_bindgen_test::*;

use plantai_core::history::HistoryStore;
use plantai_core::ports::StoragePort;
use plantai_platform::storage::MemoryStorage;
use plantai_types::message::Message;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", "value1").await.unwrap();
    let result = storage.get("key1").await.unwrap();
    assert_eq!(result.as_deref(), Some("value1"));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "v1").await.unwrap();
    storage.set("key", "v2").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert_eq!(result.as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
async fn memory_storage_remove() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").await.unwrap();
    storage.remove("key").await.unwrap();
    assert!(storage.get("key").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_remove_nonexistent() {
    let storage = MemoryStorage::new();
    storage.remove("nonexistent").await.unwrap();
}

// ─── HistoryStore over MemoryStorage ─────────────────────

#[wasm_bindgen_test]
async fn history_roundtrip_over_memory_backend() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let history = HistoryStore::new(storage, 10);

    let messages = vec![Message::user("pergunta"), Message::notice("resposta")];
    history.save(&messages).await;

    let loaded = history.load().await;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].content, "pergunta");
}

#[wasm_bindgen_test]
async fn history_clear_over_memory_backend() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let history = HistoryStore::new(storage, 10);

    history.save(&[Message::user("pergunta")]).await;
    history.clear().await;
    assert!(history.load().await.is_empty());
}

#[wasm_bindgen_test]
async fn history_corrupt_slot_degrades_to_empty() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    storage
        .set("plantai:history", "not valid json")
        .await
        .unwrap();

    let history = HistoryStore::new(storage, 10);
    assert!(history.load().await.is_empty());
}
