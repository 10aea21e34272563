use serde::{Deserialize, Serialize};

/// Role of one conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A retrieval citation attached to an answered message.
///
/// All fields are reproduced as the service returns them; in particular
/// `score` has no enforced range and `content` is the raw excerpt
/// (display truncation belongs to the UI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub source: String,
    pub uri: String,
    pub page: i64,
    pub chunk_id: String,
    pub content: String,
    pub score: f64,
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// RFC 3339 creation instant
    pub timestamp: String,
    /// Present only on assistant messages that answered successfully
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sources: Option<Vec<Source>>,
}

impl Message {
    fn new(role: Role, content: String, sources: Option<Vec<Source>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
            sources,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into(), None)
    }

    /// A successful answer with its citations
    pub fn answer(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self::new(Role::Assistant, text.into(), Some(sources))
    }

    /// An assistant message with no citations (failure narration)
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text.into(), None)
    }
}

/// Payload returned by the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}
