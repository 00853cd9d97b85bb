//! Warm paper palette for the profile page.

use egui::Color32;

pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0xfd, 0xfb, 0xf7);
pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
pub const INK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const HEADING: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const MUTED: Color32 = Color32::from_rgb(0x7f, 0x8c, 0x8d);
pub const BODY: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const ACCENT: Color32 = Color32::from_rgb(0xd4, 0xc4, 0xb7);
pub const DIVIDER: Color32 = Color32::from_rgb(0xea, 0xe1, 0xd8);
pub const ERROR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const SECONDARY_BUTTON: Color32 = Color32::from_rgb(0xec, 0xf0, 0xf1);

pub const CONTENT_MAX_WIDTH: f32 = 800.0;

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_BACKGROUND;
    visuals.window_fill = CARD_BACKGROUND;
    visuals.override_text_color = Some(INK);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, DIVIDER);
    ctx.set_visuals(visuals);
}

/// Border for a text input; red while the field carries an error.
pub fn field_stroke(has_error: bool) -> egui::Stroke {
    if has_error {
        egui::Stroke::new(1.0, ERROR)
    } else {
        egui::Stroke::new(1.0, Color32::from_gray(0xcc))
    }
}
