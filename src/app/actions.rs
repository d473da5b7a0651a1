use super::*;

impl QuizApp {
    /// Pulsación sobre una opción. Devuelve `true` si el estado de la pregunta cambió.
    pub fn select_option(&mut self, question_id: &str, option: &str) -> bool {
        let Some(question) = self.feed.questions().iter().find(|q| q.id == question_id) else {
            log::warn!("Ignoring tap on unknown question {question_id}");
            return false;
        };
        self.answers.select(question, option)
    }

    pub fn select_subject(&mut self, filter: SubjectFilter) {
        if self.filter != filter {
            log::debug!("Subject filter: {}", filter.label());
            self.filter = filter;
        }
    }
}
