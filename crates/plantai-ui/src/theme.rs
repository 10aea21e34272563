//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 19, 34);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 30, 52);
pub const BG_SURFACE: Color32 = Color32::from_rgb(42, 51, 82);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 231, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(152, 161, 192);
pub const ACCENT: Color32 = Color32::from_rgb(96, 125, 245);
pub const SUCCESS: Color32 = Color32::from_rgb(52, 199, 123);
pub const ERROR: Color32 = Color32::from_rgb(239, 83, 80);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 10.0);

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
