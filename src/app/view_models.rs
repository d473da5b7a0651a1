use super::*;
use crate::model::Question;

impl QuizApp {
    pub fn subject_chips(&self) -> Vec<SubjectChip> {
        std::iter::once(SubjectFilter::All)
            .chain(
                self.config
                    .subjects
                    .iter()
                    .map(|s| SubjectFilter::Subject(s.clone())),
            )
            .map(|filter| SubjectChip {
                selected: filter == self.filter,
                filter,
            })
            .collect()
    }

    pub fn question_cards(&self) -> Vec<QuestionCard> {
        self.visible_questions()
            .into_iter()
            .map(|q| self.card_for(q))
            .collect()
    }

    fn card_for(&self, q: &Question) -> QuestionCard {
        let state = self.answers.state_for(&q.id);
        let options = q
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRow {
                index,
                text: text.clone(),
                mark: state.mark(text),
            })
            .collect();
        QuestionCard {
            id: q.id.clone(),
            subject: q.subject.clone(),
            prompt: q.question.clone(),
            options,
            feedback: state.feedback(),
        }
    }
}
