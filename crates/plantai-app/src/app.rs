//! Main egui application — composes the panels and owns the wiring
//! between UI intents and the session manager / service adapters.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use plantai_core::history::HistoryStore;
use plantai_core::ports::{ServicePort, StoragePort, UploadFile};
use plantai_core::session::{
    clear_session, restore_session, submit_question, ConversationSession,
};
use plantai_platform::api::HttpServiceClient;
use plantai_platform::storage::detect_storage;
use plantai_types::config::AppConfig;
use plantai_ui::panels::chat::{self, ChatIntent};
use plantai_ui::panels::{ingest, settings};
use plantai_ui::panels::settings::{SaveFeedback, SettingsAction};
use plantai_ui::state::{IngestStatus, UiState};
use plantai_ui::theme;

const CONFIG_KEY: &str = "plantai:config";

/// The main application state
pub struct PlantAiApp {
    ui_state: UiState,
    config: AppConfig,
    session: Rc<RefCell<ConversationSession>>,
    service: Rc<dyn ServicePort>,
    storage: Rc<dyn StoragePort>,
    history: Rc<HistoryStore>,
    folder_status: Rc<RefCell<IngestStatus>>,
    sharepoint_status: Rc<RefCell<IngestStatus>>,
    pending_config: Rc<RefCell<Option<AppConfig>>>,
    save_feedback: Rc<RefCell<Option<SaveFeedback>>>,
    first_frame: bool,
}

impl PlantAiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let storage = detect_storage();
        let history = Rc::new(HistoryStore::new(storage.clone(), config.history_retention));
        let session = Rc::new(RefCell::new(ConversationSession::new()));
        let service: Rc<dyn ServicePort> =
            Rc::new(HttpServiceClient::new(config.service.clone()));

        let pending_config = Rc::new(RefCell::new(None));
        Self::restore_config(storage.clone(), pending_config.clone());

        // Seed the conversation from the persisted window
        {
            let session = session.clone();
            let history = history.clone();
            wasm_bindgen_futures::spawn_local(async move {
                restore_session(&session, &history).await;
            });
        }

        Self {
            ui_state: UiState::new(),
            config,
            session,
            service,
            storage,
            history,
            folder_status: Rc::new(RefCell::new(IngestStatus::Idle)),
            sharepoint_status: Rc::new(RefCell::new(IngestStatus::Idle)),
            pending_config,
            save_feedback: Rc::new(RefCell::new(None)),
            first_frame: true,
        }
    }

    /// Restore config from storage (async, applied on a later frame)
    fn restore_config(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<AppConfig>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(Some(raw)) = storage.get(CONFIG_KEY).await {
                match serde_json::from_str::<AppConfig>(&raw) {
                    Ok(config) => {
                        *slot.borrow_mut() = Some(config);
                        log::info!("Config restored from storage");
                    }
                    Err(e) => log::warn!("Stored config corrupt ({}), using defaults", e),
                }
            }
        });
    }

    /// Save config to storage (async, feedback shown in the panel)
    fn save_config(&self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Config not saved (serialize failed: {})", e);
                return;
            }
        };
        let storage = self.storage.clone();
        let feedback = self.save_feedback.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let fb = match storage.set(CONFIG_KEY, &json).await {
                Ok(()) => SaveFeedback {
                    message: "Salvo".to_string(),
                    success: true,
                },
                Err(e) => {
                    log::warn!("Config not saved ({})", e);
                    SaveFeedback {
                        message: format!("Falha ao salvar: {}", e),
                        success: false,
                    }
                }
            };
            *feedback.borrow_mut() = Some(fb);
        });
    }

    /// Rebuild the adapters that capture config at construction
    fn apply_config(&mut self) {
        self.service = Rc::new(HttpServiceClient::new(self.config.service.clone()));
        self.history = Rc::new(HistoryStore::new(
            self.storage.clone(),
            self.config.history_retention,
        ));
    }
}

impl eframe::App for PlantAiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Adopt config restored by the startup task
        let pending = self.pending_config.borrow_mut().take();
        if let Some(config) = pending {
            self.config = config;
            self.apply_config();
        }

        let chat_busy = self.session.borrow().is_busy();
        if chat_busy
            || self.folder_status.borrow().is_busy()
            || self.sharepoint_status.borrow().is_busy()
        {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("PlantAI")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new("RAG para documentos industriais com ingestão local e SharePoint")
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Configurações")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    let feedback = self.save_feedback.borrow().clone();
                    match settings::settings_panel(ui, &mut self.config, feedback.as_ref()) {
                        SettingsAction::SaveClicked => {
                            self.apply_config();
                            self.save_config();
                        }
                        SettingsAction::Changed | SettingsAction::None => {}
                    }
                });
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            // Ingestion cards, side by side
            let mut pick_requested = false;
            let mut sharepoint_submit = None;
            ui.columns(2, |columns| {
                let folder_status = self.folder_status.borrow().clone();
                pick_requested = ingest::folder_panel(&mut columns[0], &folder_status);

                let sharepoint_status = self.sharepoint_status.borrow().clone();
                sharepoint_submit = ingest::sharepoint_panel(
                    &mut columns[1],
                    &mut self.ui_state,
                    &sharepoint_status,
                );
            });

            if pick_requested {
                self.dispatch_folder_ingest(ctx);
            }
            if let Some(path) = sharepoint_submit {
                self.dispatch_sharepoint_ingest(path, ctx);
            }

            ui.add_space(4.0);

            // Chat panel
            let intent = {
                let session = self.session.borrow();
                chat::chat_panel(ui, &mut self.ui_state, session.messages(), chat_busy)
            };
            match intent {
                Some(ChatIntent::Submit(text)) => self.dispatch_question(text, ctx),
                Some(ChatIntent::Clear) => self.dispatch_clear(ctx),
                None => {}
            }
        });
    }
}

impl PlantAiApp {
    /// Submit a question through the session manager (async)
    fn dispatch_question(&self, text: String, ctx: &egui::Context) {
        let session = self.session.clone();
        let service = self.service.clone();
        let history = self.history.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            submit_question(&session, &service, &history, &text).await;
            ctx.request_repaint();
        });
    }

    /// Reset history and erase the persisted slot (async).
    /// The panel disables the affordance while a question is in flight.
    fn dispatch_clear(&self, ctx: &egui::Context) {
        if self.session.borrow().is_busy() {
            return;
        }
        let session = self.session.clone();
        let history = self.history.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            clear_session(&session, &history).await;
            ctx.request_repaint();
        });
    }

    /// Pick local files and upload them for ingestion (async)
    fn dispatch_folder_ingest(&self, ctx: &egui::Context) {
        let service = self.service.clone();
        let status = self.folder_status.clone();
        let ctx = ctx.clone();

        *status.borrow_mut() = IngestStatus::Working("Selecionando arquivos…".to_string());

        wasm_bindgen_futures::spawn_local(async move {
            let handles = match rfd::AsyncFileDialog::new().pick_files().await {
                Some(handles) if !handles.is_empty() => handles,
                // Cancelled or empty pick: nothing to ingest
                _ => {
                    *status.borrow_mut() = IngestStatus::Idle;
                    ctx.request_repaint();
                    return;
                }
            };

            *status.borrow_mut() = IngestStatus::Working("Ingerindo pasta…".to_string());
            ctx.request_repaint();

            let mut files = Vec::with_capacity(handles.len());
            for handle in &handles {
                files.push(UploadFile {
                    name: handle.file_name(),
                    mime: "application/octet-stream".to_string(),
                    data: handle.read().await,
                });
            }

            *status.borrow_mut() = match service.ingest_local_files(&files).await {
                Ok(()) => IngestStatus::Done("✅ Ingestão concluída".to_string()),
                Err(e) => {
                    log::error!("Folder ingestion failed: {}", e);
                    IngestStatus::Failed(format!("❌ {}", e))
                }
            };
            ctx.request_repaint();
        });
    }

    /// Ingest a SharePoint folder path (async)
    fn dispatch_sharepoint_ingest(&self, path: String, ctx: &egui::Context) {
        if path.trim().is_empty() {
            return;
        }
        let service = self.service.clone();
        let status = self.sharepoint_status.clone();
        let ctx = ctx.clone();

        *status.borrow_mut() =
            IngestStatus::Working("Conectando ao SharePoint e processando…".to_string());

        wasm_bindgen_futures::spawn_local(async move {
            *status.borrow_mut() = match service.ingest_remote_folder(&path).await {
                Ok(()) => IngestStatus::Done("✅ Ingestão concluída do SharePoint".to_string()),
                Err(e) => {
                    log::error!("SharePoint ingestion failed: {}", e);
                    IngestStatus::Failed(format!("❌ Erro: {}", e))
                }
            };
            ctx.request_repaint();
        });
    }
}
