//! Conversation session manager — the one stateful, rule-bearing component.
//!
//! Two states: `Idle` and `Awaiting` (exactly one ask-question call
//! outstanding). The guard is an explicit precondition on `begin_question`,
//! not an accidental property of the single-threaded runtime: a submission
//! while `Awaiting` is rejected outright, never queued.
//!
//! Transport failures on the chat call are narrated in-band as a fixed
//! assistant notice; they never propagate out of the submit path.

use std::cell::RefCell;
use std::rc::Rc;

use plantai_types::{
    message::{Answer, Message},
    ServiceError,
};

use crate::history::HistoryStore;
use crate::ports::ServicePort;

/// Fixed notice appended when the service fails to answer
pub const ANSWER_FAILURE_NOTICE: &str =
    "Não foi possível obter a resposta do serviço. Tente novamente.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Awaiting,
}

/// Ordered message history plus the request lifecycle flag
pub struct ConversationSession {
    messages: Vec<Message>,
    state: SessionState,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SessionState::Awaiting
    }

    /// Adopt restored history. Only applies while the session is still
    /// untouched, so a slow load never clobbers live conversation state.
    pub fn seed(&mut self, messages: Vec<Message>) {
        if self.messages.is_empty() && !self.is_busy() {
            self.messages = messages;
        }
    }

    /// Validate and open a question turn: `Idle -> Awaiting`.
    ///
    /// Returns the trimmed question to send, or `None` (no state change)
    /// when the text is blank or a request is already outstanding.
    pub fn begin_question(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_busy() {
            return None;
        }
        self.messages.push(Message::user(trimmed));
        self.state = SessionState::Awaiting;
        Some(trimmed.to_string())
    }

    /// Fold the outcome of the outstanding call into the history:
    /// `Awaiting -> Idle`. An error becomes the fixed failure notice with
    /// no sources — the policy branch is this match, not an exception path.
    pub fn settle(&mut self, outcome: Result<Answer, ServiceError>) {
        let response = match outcome {
            Ok(answer) => Message::answer(answer.answer, answer.sources),
            Err(_) => Message::notice(ANSWER_FAILURE_NOTICE),
        };
        self.messages.push(response);
        self.state = SessionState::Idle;
    }

    /// Reset the in-memory history. Allowed in either state; the UI keeps
    /// the affordance disabled while busy so a settling response cannot
    /// resurrect cleared history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one full question turn: validate → remote call → settle → persist.
///
/// Borrows on the shared session are scoped so none is held across the
/// single suspension point; the UI can keep rendering snapshots while the
/// call is in flight.
pub async fn submit_question(
    session: &Rc<RefCell<ConversationSession>>,
    service: &Rc<dyn ServicePort>,
    history: &HistoryStore,
    text: &str,
) {
    let question = {
        let mut session = session.borrow_mut();
        match session.begin_question(text) {
            Some(question) => question,
            None => return,
        }
    };

    let outcome = service.ask_question(&question).await;
    if let Err(ref e) = outcome {
        log::warn!("Chat request failed: {}", e);
    }

    let snapshot = {
        let mut session = session.borrow_mut();
        session.settle(outcome);
        session.messages().to_vec()
    };
    history.save(&snapshot).await;
}

/// Reset history and erase the persisted slot
pub async fn clear_session(session: &Rc<RefCell<ConversationSession>>, history: &HistoryStore) {
    session.borrow_mut().clear();
    history.clear().await;
}

/// Seed the session from storage at mount
pub async fn restore_session(session: &Rc<RefCell<ConversationSession>>, history: &HistoryStore) {
    let messages = history.load().await;
    if !messages.is_empty() {
        log::info!("Restored {} persisted messages", messages.len());
    }
    session.borrow_mut().seed(messages);
}
