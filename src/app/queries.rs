use super::*;
use crate::model::Question;

impl QuizApp {
    /// Preguntas cargadas que pasan el filtro, en el orden recibido
    pub fn visible_questions(&self) -> Vec<&Question> {
        self.feed
            .questions()
            .iter()
            .filter(|q| self.filter.matches(q))
            .collect()
    }

    pub fn empty_message(&self) -> String {
        match &self.filter {
            SubjectFilter::All => "No questions available".to_string(),
            SubjectFilter::Subject(subject) => format!("No questions available for {subject}"),
        }
    }
}
