//! Pick the best available storage backend.
//!
//! Priority: localStorage first, Memory as fallback. History persisted
//! to the memory backend does not survive a reload; the session then
//! starts empty, same as a missing slot.

use std::rc::Rc;

use plantai_core::ports::StoragePort;

use super::{LocalStorage, MemoryStorage};

/// Open the best available backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::open() {
        Ok(ls) => {
            log::info!("Storage backend: localStorage");
            Rc::new(ls)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
