//! Persistent history store — a capped slice of conversation history
//! saved as one JSON blob in a named storage slot.
//!
//! Absence or corruption of the slot is never an error: it degrades to
//! an empty history. Writes are fire-and-forget; failures are logged and
//! swallowed so a full quota can never break the conversation itself.

use std::rc::Rc;

use plantai_types::message::Message;

use crate::ports::StoragePort;

/// Storage slot holding the retained conversation window
pub const HISTORY_KEY: &str = "plantai:history";

pub struct HistoryStore {
    storage: Rc<dyn StoragePort>,
    key: String,
    retention: usize,
}

impl HistoryStore {
    pub fn new(storage: Rc<dyn StoragePort>, retention: usize) -> Self {
        Self::with_key(storage, HISTORY_KEY, retention)
    }

    pub fn with_key(storage: Rc<dyn StoragePort>, key: &str, retention: usize) -> Self {
        Self {
            storage,
            key: key.to_string(),
            retention,
        }
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    /// Load the persisted window, oldest-first.
    /// A missing or unparseable slot yields an empty history.
    pub async fn load(&self) -> Vec<Message> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("History slot unreadable ({}), starting empty", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(messages) => messages,
            Err(e) => {
                log::warn!("History slot corrupt ({}), starting empty", e);
                Vec::new()
            }
        }
    }

    /// Persist the most recent `retention` messages, overwriting the slot.
    /// The window is applied here so the cap lives in exactly one place.
    pub async fn save(&self, messages: &[Message]) {
        let start = messages.len().saturating_sub(self.retention);
        let window = &messages[start..];
        let json = match serde_json::to_string(window) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("History not persisted (serialize failed: {})", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json).await {
            log::warn!("History not persisted ({})", e);
        }
    }

    /// Erase the persisted window
    pub async fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key).await {
            log::warn!("History slot not cleared ({})", e);
        }
    }
}
