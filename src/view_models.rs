// src/view_models.rs

use crate::answer::{Feedback, OptionMark};
use crate::model::SubjectFilter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectChip {
    pub filter: SubjectFilter,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize, // posición en `options`, sirve de id del botón
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: String,
    pub subject: String,
    pub prompt: String,
    pub options: Vec<OptionRow>,
    pub feedback: Option<Feedback>,
}

impl SubjectChip {
    pub fn label(&self) -> &str {
        self.filter.label()
    }
}
