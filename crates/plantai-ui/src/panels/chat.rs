//! Chat panel — conversation history, citation cards, and the input row.
//!
//! Pure read/render over the session snapshot plus intent dispatch.
//! Both submit and clear are disabled while a question is in flight, so
//! a clear can never race the settling response.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use plantai_types::message::{Message, Role, Source};

use crate::state::UiState;
use crate::theme::*;

/// Maximum excerpt length shown on a citation card (display only)
const EXCERPT_CHARS: usize = 240;

/// What the user asked the session manager to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    Submit(String),
    Clear,
}

/// Render the chat panel. Returns the user's intent, if any.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: &[Message],
    busy: bool,
) -> Option<ChatIntent> {
    let mut intent = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Conversa").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let can_clear = !busy && !messages.is_empty();
                        if ui
                            .add_enabled(
                                can_clear,
                                egui::Button::new(
                                    RichText::new("Limpar").color(TEXT_SECONDARY).small(),
                                )
                                .corner_radius(PANEL_ROUNDING),
                            )
                            .clicked()
                        {
                            intent = Some(ChatIntent::Clear);
                        }
                        let (status, color) = if busy {
                            ("Pensando…", WARNING)
                        } else {
                            ("Pronto", SUCCESS)
                        };
                        ui.label(RichText::new(status).color(color).small());
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if busy {
                            ui.label(
                                RichText::new("Pensando…")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.question_input)
                        .hint_text("Faça sua pergunta…")
                        .desired_width(ui.available_width() - 100.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let can_send = !state.question_input.trim().is_empty() && !busy;
                    let send_btn = ui.add_enabled(
                        can_send,
                        egui::Button::new(RichText::new("Perguntar").color(TEXT_PRIMARY))
                            .fill(if can_send { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(90.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && can_send)
                        || send_btn.clicked()
                    {
                        let text = state.question_input.trim().to_string();
                        intent = Some(ChatIntent::Submit(text));
                        state.question_input.clear();
                        response.request_focus();
                    }
                });
            });
        });

    intent
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color) = match message.role {
        Role::User => ("Você", ACCENT),
        Role::Assistant => ("Assistente", SUCCESS),
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));

            if let Some(sources) = &message.sources {
                if !sources.is_empty() {
                    ui.add_space(6.0);
                    ui.label(RichText::new("Fontes").color(TEXT_SECONDARY).small());
                    for source in sources {
                        render_source(ui, source);
                    }
                }
            }
        });
}

fn render_source(ui: &mut egui::Ui, source: &Source) {
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!(
                    "{} — p.{} — score {:.3}",
                    source.uri, source.page, source.score
                ))
                .color(TEXT_SECONDARY)
                .small(),
            );
            ui.label(
                RichText::new(excerpt(&source.content))
                    .color(TEXT_PRIMARY)
                    .small(),
            );
        });
}

/// Cut the excerpt at a character boundary for display
fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod excerpt_tests {
    use super::excerpt;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(excerpt("curto"), "curto");
    }

    #[test]
    fn test_long_text_truncated_at_char_boundary() {
        let long = "á".repeat(300);
        let cut = excerpt(&long);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), 241);
    }
}
