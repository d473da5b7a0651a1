use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Quiz").heading().strong());
        });
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    let theme = super::theme::current(ctx);
    CentralPanel::default()
        .frame(Frame::central_panel(&ctx.style()).fill(theme.background))
        .show(ctx, |ui| {
            // Espacio vertical para centrar
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                inner(ui);
            });
        });
}
