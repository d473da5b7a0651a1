use crate::ui::layout::centered_panel;
use crate::ui::theme;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    let theme = theme::current(ctx);
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.label(
            RichText::new("Loading questions...")
                .size(16.0)
                .color(theme.muted),
        );
        ui.add_space(20.0);
        ui.add(Spinner::new());
    });
}
