//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `plantai-core` (pure Rust).
//! Implementations live in `plantai-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use plantai_types::{message::Answer, Result};

// ─── Service Port ────────────────────────────────────────────

/// A file selected for upload, detached from any browser handle
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub data: Vec<u8>,
}

/// The remote RAG service. Three independent single-shot operations;
/// each attaches the credential token supplied at adapter construction.
/// No retry and no cancellation — a call resolves or fails.
#[async_trait(?Send)]
pub trait ServicePort {
    /// Upload local files for indexing. Callers check `files` is non-empty.
    async fn ingest_local_files(&self, files: &[UploadFile]) -> Result<()>;

    /// Ingest documents from a SharePoint folder path (opaque locator).
    async fn ingest_remote_folder(&self, folder: &str) -> Result<()>;

    /// Ask a question; returns the generated answer plus its citations.
    async fn ask_question(&self, question: &str) -> Result<Answer>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Key-value storage scoped to the browser profile.
/// Values are strings because the persisted payloads are JSON blobs.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, overwriting prior content
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value
    async fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
