use crate::ui::layout::centered_panel;
use crate::ui::theme;
use egui::{Context, RichText};

pub fn ui_failed(ctx: &Context, message: &str) {
    let theme = theme::current(ctx);
    centered_panel(ctx, 60.0, 400.0, |ui| {
        ui.label(RichText::new(message).size(16.0).color(theme.error));
    });
}
