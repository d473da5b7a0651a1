// src/answer.rs

use crate::model::Question;
use std::collections::{HashMap, HashSet};

/// Estado de respuesta de una pregunta. `Correct` es terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Incorrect {
        selected: String,
        attempts: HashSet<String>,
    },
    Correct {
        selected: String,
        attempts: HashSet<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Correct,
    Wrong,
    Attempted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
}

impl Feedback {
    pub fn text(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct! Well done!",
            Feedback::TryAgain => "Try again! That wasn't the right answer.",
        }
    }
}

impl AnswerState {
    /// Devuelve `true` si el estado cambió.
    pub fn select(&mut self, option: &str, correct_answer: &str) -> bool {
        let mut attempts = match self {
            AnswerState::Correct { .. } => return false,
            AnswerState::Incorrect { selected, .. } if selected.as_str() == option => {
                return false;
            }
            AnswerState::Incorrect { attempts, .. } => std::mem::take(attempts),
            AnswerState::Unanswered => HashSet::new(),
        };

        *self = if option == correct_answer {
            AnswerState::Correct {
                selected: option.to_string(),
                attempts,
            }
        } else {
            attempts.insert(option.to_string());
            AnswerState::Incorrect {
                selected: option.to_string(),
                attempts,
            }
        };
        true
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Incorrect { selected, .. } | AnswerState::Correct { selected, .. } => {
                Some(selected.as_str())
            }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerState::Correct { .. })
    }

    pub fn attempts(&self) -> Option<&HashSet<String>> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Incorrect { attempts, .. } | AnswerState::Correct { attempts, .. } => {
                Some(attempts)
            }
        }
    }

    pub fn was_attempted(&self, option: &str) -> bool {
        self.attempts().is_some_and(|a| a.contains(option))
    }

    pub fn mark(&self, option: &str) -> OptionMark {
        if self.selected() == Some(option) {
            if self.is_correct() {
                OptionMark::Correct
            } else {
                OptionMark::Wrong
            }
        } else if self.was_attempted(option) {
            OptionMark::Attempted
        } else {
            OptionMark::Idle
        }
    }

    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Incorrect { .. } => Some(Feedback::TryAgain),
            AnswerState::Correct { .. } => Some(Feedback::Correct),
        }
    }
}

/// Estados por id de pregunta; una entrada ausente equivale a `Unanswered`.
#[derive(Debug, Default, Clone)]
pub struct AnswerBook {
    states: HashMap<String, AnswerState>,
}

impl AnswerBook {
    pub fn get(&self, question_id: &str) -> Option<&AnswerState> {
        self.states.get(question_id)
    }

    pub fn state_for(&self, question_id: &str) -> AnswerState {
        self.get(question_id).cloned().unwrap_or_default()
    }

    pub fn select(&mut self, question: &Question, option: &str) -> bool {
        if !question.has_option(option) {
            log::warn!(
                "Ignoring option {option:?}: not offered by question {}",
                question.id
            );
            return false;
        }
        let changed = self
            .states
            .entry(question.id.clone())
            .or_default()
            .select(option, &question.correct_answer);
        if changed {
            log::debug!("Question {} answered with {option:?}", question.id);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: "1".into(),
            subject: "Economics".into(),
            question: "Q1".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: "a".into(),
        }
    }

    #[test]
    fn wrong_then_right_locks_the_answer() {
        let mut state = AnswerState::default();
        assert!(state.select("b", "a"));
        assert_eq!(state.mark("b"), OptionMark::Wrong);
        assert!(state.select("a", "a"));
        assert!(state.is_correct());
        assert_eq!(state.selected(), Some("a"));
        assert!(state.was_attempted("b"));
        assert_eq!(state.attempts().map(HashSet::len), Some(1));

        let frozen = state.clone();
        assert!(!state.select("b", "a"));
        assert!(!state.select("c", "a"));
        assert_eq!(state, frozen);
    }

    #[test]
    fn previous_wrong_options_stay_attempted() {
        let mut state = AnswerState::default();
        state.select("b", "a");
        state.select("c", "a");
        assert_eq!(state.mark("b"), OptionMark::Attempted);
        assert_eq!(state.mark("c"), OptionMark::Wrong);
        assert_eq!(state.mark("a"), OptionMark::Idle);

        state.select("b", "a");
        assert_eq!(state.mark("b"), OptionMark::Wrong);
        assert_eq!(state.mark("c"), OptionMark::Attempted);
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut state = AnswerState::default();
        state.select("b", "a");
        let after_first = state.clone();
        assert!(!state.select("b", "a"));
        assert_eq!(state, after_first);

        state.select("a", "a");
        let after_correct = state.clone();
        assert!(!state.select("a", "a"));
        assert_eq!(state, after_correct);
    }

    #[test]
    fn first_pick_correct_has_no_attempts() {
        let mut state = AnswerState::default();
        state.select("a", "a");
        assert_eq!(state.mark("a"), OptionMark::Correct);
        assert!(state.attempts().is_some_and(HashSet::is_empty));
        assert_eq!(state.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn feedback_follows_state() {
        let mut state = AnswerState::default();
        assert_eq!(state.feedback(), None);
        state.select("c", "a");
        assert_eq!(
            state.feedback().map(Feedback::text),
            Some("Try again! That wasn't the right answer.")
        );
    }

    #[test]
    fn book_ignores_unknown_options_and_keys_by_id() {
        let q = question();
        let mut book = AnswerBook::default();
        assert!(!book.select(&q, "zzz"));
        assert!(book.get("1").is_none());

        assert!(book.select(&q, "b"));
        assert_eq!(book.state_for("1").selected(), Some("b"));
        assert_eq!(book.state_for("2"), AnswerState::Unanswered);
        assert!(book.get("2").is_none());
    }
}
