// src/ui/helpers.rs
use super::theme::Theme;
use crate::view_models::{OptionRow, SubjectChip};
use egui::{Button, RichText, Stroke, Ui, Vec2};

/// Botón de opción coloreado según su marca. Devuelve si se pulsó.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32, theme: &Theme) -> bool {
    let style = theme.option(row.mark);
    let mut text = RichText::new(&row.text).size(16.0).color(style.text);
    if style.strong {
        text = text.strong();
    }
    let button = Button::new(text)
        .fill(style.fill)
        .stroke(Stroke::new(1.0, style.border))
        .min_size(Vec2::new(width, 44.0));
    ui.add(button).clicked()
}

pub fn filter_chip(ui: &mut Ui, chip: &SubjectChip, theme: &Theme) -> bool {
    let (fill, color) = if chip.selected {
        (theme.chip_selected_fill, theme.chip_selected_text)
    } else {
        (theme.chip_fill, theme.chip_text)
    };
    let button = Button::new(RichText::new(chip.label()).color(color))
        .fill(fill)
        .stroke(Stroke::NONE)
        .min_size(Vec2::new(0.0, 30.0));
    ui.add(button).clicked()
}
