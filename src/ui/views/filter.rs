use crate::model::SubjectFilter;
use crate::ui::helpers::filter_chip;
use crate::ui::theme::Theme;
use crate::view_models::SubjectChip;
use egui::{Frame, ScrollArea, Ui};

/// Fila horizontal de chips; devuelve el filtro pulsado, si lo hay.
pub fn subject_filter_bar(ui: &mut Ui, chips: &[SubjectChip], theme: &Theme) -> Option<SubjectFilter> {
    let mut picked = None;
    Frame::default()
        .fill(theme.card_fill)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ScrollArea::horizontal()
                .id_salt("subject_filter")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 8.0;
                        for chip in chips {
                            if filter_chip(ui, chip, theme) {
                                picked = Some(chip.filter.clone());
                            }
                        }
                    });
                });
        });
    picked
}
