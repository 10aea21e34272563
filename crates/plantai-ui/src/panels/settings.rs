//! Settings panel — service address, credential token, retention window.
//! Explicit Save button with visual feedback.

use egui::{self, RichText, Vec2};

use plantai_types::config::AppConfig;

use crate::theme::*;

/// What the caller should do after rendering the settings panel
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was changed (not yet persisted)
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
}

/// Save feedback passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut AppConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Configurações").color(TEXT_PRIMARY));
            ui.separator();

            // ── Service Section ──────────────────────────────
            ui.label(RichText::new("Serviço").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Endereço base").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::TextEdit::singleline(&mut config.service.base_url)
                        .hint_text("http://localhost:8000"),
                )
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Chave de API").color(TEXT_SECONDARY).small());
            let api_key_edit = egui::TextEdit::singleline(&mut config.service.api_key)
                .password(true)
                .hint_text("x_api_key");
            if ui.add(api_key_edit).changed() {
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── History Section ──────────────────────────────
            ui.label(RichText::new("Histórico").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(
                RichText::new("Mensagens retidas entre sessões")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            if ui
                .add(egui::Slider::new(&mut config.history_retention, 2..=50))
                .changed()
            {
                changed = true;
            }

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Salvar").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(100.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
