//! WASM-target tests for plantai-core.
//!
//! Runs the session state machine and history store against mock ports
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen_test::*;

use plantai_core::history::{HistoryStore, HISTORY_KEY};
use plantai_core::ports::{ServicePort, StoragePort, UploadFile};
use plantai_core::session::{
    submit_question, ConversationSession, SessionState, ANSWER_FAILURE_NOTICE,
};
use plantai_types::message::{Answer, Message, Role};
use plantai_types::ServiceError;

struct MockStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MockStorage {
    fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
        }
    }
}

#[async_trait(?Send)]
impl StoragePort for MockStorage {
    async fn get(&self, key: &str) -> plantai_types::Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> plantai_types::Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> plantai_types::Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MockService {
    fail: bool,
}

#[async_trait(?Send)]
impl ServicePort for MockService {
    async fn ingest_local_files(&self, _files: &[UploadFile]) -> plantai_types::Result<()> {
        Ok(())
    }

    async fn ingest_remote_folder(&self, _folder: &str) -> plantai_types::Result<()> {
        Ok(())
    }

    async fn ask_question(&self, question: &str) -> plantai_types::Result<Answer> {
        if self.fail {
            Err(ServiceError::Network("offline".to_string()))
        } else {
            Ok(Answer {
                answer: format!("echo: {}", question),
                sources: vec![],
            })
        }
    }
}

#[wasm_bindgen_test]
fn session_starts_idle() {
    let session = ConversationSession::new();
    assert_eq!(*session.state(), SessionState::Idle);
    assert!(session.messages().is_empty());
}

#[wasm_bindgen_test]
fn begin_rejects_blank_and_busy() {
    let mut session = ConversationSession::new();
    assert!(session.begin_question("  ").is_none());
    assert!(session.begin_question("ok").is_some());
    assert!(session.begin_question("while busy").is_none());
    assert_eq!(session.messages().len(), 1);
}

#[wasm_bindgen_test]
async fn submit_success_appends_pair_and_persists() {
    let storage: Rc<dyn StoragePort> = Rc::new(MockStorage::new());
    let history = HistoryStore::new(storage.clone(), 10);
    let session = Rc::new(RefCell::new(ConversationSession::new()));
    let service: Rc<dyn ServicePort> = Rc::new(MockService { fail: false });

    submit_question(&session, &service, &history, "pergunta").await;

    let session = session.borrow();
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[0].role, Role::User);
    assert_eq!(session.messages()[1].content, "echo: pergunta");
    assert!(!session.is_busy());

    let raw = storage.get(HISTORY_KEY).await.unwrap().unwrap();
    let persisted: Vec<Message> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 2);
}

#[wasm_bindgen_test]
async fn submit_failure_narrates_in_band() {
    let storage: Rc<dyn StoragePort> = Rc::new(MockStorage::new());
    let history = HistoryStore::new(storage, 10);
    let session = Rc::new(RefCell::new(ConversationSession::new()));
    let service: Rc<dyn ServicePort> = Rc::new(MockService { fail: true });

    submit_question(&session, &service, &history, "pergunta").await;

    let session = session.borrow();
    assert_eq!(session.messages()[1].content, ANSWER_FAILURE_NOTICE);
    assert!(session.messages()[1].sources.is_none());
    assert!(!session.is_busy());
}

#[wasm_bindgen_test]
async fn history_window_holds_ten() {
    let storage: Rc<dyn StoragePort> = Rc::new(MockStorage::new());
    let history = HistoryStore::new(storage, 10);
    let messages: Vec<Message> = (0..12).map(|i| Message::user(format!("m{}", i))).collect();

    history.save(&messages).await;
    let loaded = history.load().await;
    assert_eq!(loaded.len(), 10);
    assert_eq!(loaded[0].content, "m2");
}
