use crate::ui::helpers::option_button;
use crate::ui::theme::Theme;
use crate::view_models::QuestionCard;
use egui::{Frame, RichText, Stroke, Ui};

/// Tarjeta de una pregunta. Devuelve el texto de la opción pulsada.
pub fn question_card(ui: &mut Ui, card: &QuestionCard, width: f32, theme: &Theme) -> Option<String> {
    let mut tapped = None;
    ui.push_id(&card.id, |ui| {
        Frame::default()
            .fill(theme.card_fill)
            .stroke(Stroke::new(1.0, theme.card_border))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(&card.subject).size(14.0).color(theme.subject));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(&card.prompt)
                        .size(18.0)
                        .strong()
                        .color(theme.prompt),
                );
                ui.add_space(16.0);

                for row in &card.options {
                    ui.push_id(row.index, |ui| {
                        if option_button(ui, row, width, theme) {
                            tapped = Some(row.text.clone());
                        }
                    });
                    ui.add_space(12.0);
                }

                if let Some(feedback) = card.feedback {
                    ui.add_space(4.0);
                    Frame::default()
                        .fill(theme.feedback_fill)
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(12))
                        .show(ui, |ui| {
                            ui.set_width(width - 24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(feedback.text())
                                        .size(16.0)
                                        .strong()
                                        .color(theme.feedback(feedback)),
                                );
                            });
                        });
                }
            });
    });
    tapped
}
