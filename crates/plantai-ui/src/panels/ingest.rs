//! Ingestion cards — local folder upload and SharePoint path.
//!
//! Each card has its own status and busy flag; neither is coupled to the
//! chat session, so documents can be ingested while a question is in
//! flight.

use egui::{self, RichText, Vec2};

use crate::state::{IngestStatus, UiState};
use crate::theme::*;

/// Render the local-folder card. Returns true when the user asked to
/// pick files (the dialog itself is a platform concern).
pub fn folder_panel(ui: &mut egui::Ui, status: &IngestStatus) -> bool {
    let mut pick_requested = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Pasta local").color(ACCENT).strong());
            ui.label(
                RichText::new("Ingira documentos de uma pasta do seu computador")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.add_space(6.0);

            let btn = ui.add_enabled(
                !status.is_busy(),
                egui::Button::new(RichText::new("Selecionar arquivos…").color(TEXT_PRIMARY))
                    .fill(if status.is_busy() { BG_SURFACE } else { ACCENT })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(140.0, 0.0)),
            );
            if btn.clicked() {
                pick_requested = true;
            }

            status_line(ui, status);
        });

    pick_requested
}

/// Render the SharePoint card. Returns the folder path on submit.
pub fn sharepoint_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    status: &IngestStatus,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.label(RichText::new("SharePoint").color(ACCENT).strong());
            ui.label(
                RichText::new("Ingira documentos do Microsoft SharePoint")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut state.sharepoint_path)
                    .hint_text("Documents/Folder/Subfolder")
                    .desired_width(ui.available_width() - 80.0);
                let response = ui.add_enabled(!status.is_busy(), input);

                let can_send = !state.sharepoint_path.trim().is_empty() && !status.is_busy();
                let btn = ui.add_enabled(
                    can_send,
                    egui::Button::new(RichText::new("Ingerir").color(TEXT_PRIMARY))
                        .fill(if can_send { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(64.0, 0.0)),
                );

                if (response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && can_send)
                    || btn.clicked()
                {
                    submitted = Some(state.sharepoint_path.trim().to_string());
                }
            });

            status_line(ui, status);
        });

    submitted
}

fn status_line(ui: &mut egui::Ui, status: &IngestStatus) {
    let (text, color) = match status {
        IngestStatus::Idle => return,
        IngestStatus::Working(s) => (s, WARNING),
        IngestStatus::Done(s) => (s, SUCCESS),
        IngestStatus::Failed(s) => (s, ERROR),
    };
    ui.add_space(4.0);
    ui.label(RichText::new(text).color(color).small());
}
