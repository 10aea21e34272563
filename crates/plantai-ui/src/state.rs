//! UI-level state that drives rendering.
//! Holds input buffers and per-affordance ingestion status; the
//! conversation itself is rendered from the session manager's snapshot
//! and is never duplicated here.

/// State visible to UI panels
pub struct UiState {
    /// Question input field content
    pub question_input: String,
    /// SharePoint folder path input
    pub sharepoint_path: String,
    /// Whether the settings panel is open
    pub show_settings: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            question_input: String::new(),
            sharepoint_path: "Documents/PlantSpecs".to_string(),
            show_settings: false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of one ingestion affordance. Each card carries its own busy
/// flag, independent of the chat session and of the other card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestStatus {
    Idle,
    Working(String),
    Done(String),
    Failed(String),
}

impl IngestStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, IngestStatus::Working(_))
    }

    pub fn text(&self) -> &str {
        match self {
            IngestStatus::Idle => "",
            IngestStatus::Working(s) | IngestStatus::Done(s) | IngestStatus::Failed(s) => s,
        }
    }
}
