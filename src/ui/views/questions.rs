use super::{card::question_card, filter::subject_filter_bar};
use crate::QuizApp;
use crate::ui::theme;
use egui::{CentralPanel, Context, Frame, RichText, ScrollArea};

pub fn ui_questions(app: &mut QuizApp, ctx: &Context) {
    let theme = theme::current(ctx);
    let chips = app.subject_chips();
    let cards = app.question_cards();
    let empty_message = app.empty_message();

    let mut picked_filter = None;
    let mut tapped: Option<(String, String)> = None;

    CentralPanel::default()
        .frame(Frame::central_panel(&ctx.style()).fill(theme.background))
        .show(ctx, |ui| {
            picked_filter = subject_filter_bar(ui, &chips, theme);
            ui.add_space(8.0);

            if cards.is_empty() {
                ui.add_space(32.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&empty_message).size(16.0).color(theme.muted));
                });
                return;
            }

            let max_width = 650.0;
            ScrollArea::vertical()
                .id_salt("question_list")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        // Ancho del contenido de la tarjeta, sin márgenes
                        let width = (ui.available_width() * 0.97).min(max_width) - 32.0;
                        for card in &cards {
                            if let Some(option) = question_card(ui, card, width, theme) {
                                tapped = Some((card.id.clone(), option));
                            }
                            ui.add_space(16.0);
                        }
                    });
                });
        });

    if let Some(filter) = picked_filter {
        app.select_subject(filter);
    }
    if let Some((id, option)) = tapped {
        app.select_option(&id, &option);
    }
}
