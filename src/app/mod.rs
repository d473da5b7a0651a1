use crate::answer::AnswerBook;
use crate::data::QuizConfig;
use crate::feed::FeedLoader;
use crate::model::{FeedState, SubjectFilter};

// Submódulos
pub mod actions;
pub mod queries;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, QuestionCard, SubjectChip};

pub struct QuizApp {
    pub config: QuizConfig,
    pub feed: FeedState,
    pub filter: SubjectFilter,
    pub answers: AnswerBook,
    loader: Option<FeedLoader>,
}

impl QuizApp {
    /// Lanza la única petición de preguntas de esta instancia.
    pub fn new(config: QuizConfig) -> Self {
        let loader = FeedLoader::start(&config.base_url);
        Self::with_loader(config, loader)
    }

    pub fn with_loader(config: QuizConfig, loader: FeedLoader) -> Self {
        Self {
            config,
            feed: FeedState::Loading,
            filter: SubjectFilter::All,
            answers: AnswerBook::default(),
            loader: Some(loader),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::answer::OptionMark;
    use crate::feed::{FeedError, parse_questions};
    use crate::model::Question;

    pub(crate) fn config() -> QuizConfig {
        QuizConfig {
            base_url: "http://127.0.0.1:3000".into(),
            subjects: vec!["Economics".into(), "Soil Science".into()],
        }
    }

    pub(crate) fn question(id: &str, subject: &str) -> Question {
        Question {
            id: id.into(),
            subject: subject.into(),
            question: format!("Q{id}"),
            options: vec!["a".into(), "b".into()],
            correct_answer: "a".into(),
        }
    }

    pub(crate) fn loaded(questions: Vec<Question>) -> QuizApp {
        let mut app = QuizApp::with_loader(config(), FeedLoader::ready(Ok(questions)));
        app.poll_feed();
        app
    }

    const SCENARIO_A: &str = r#"{"questions":[{"_id":"1","subject":"Economics","question":"Q1","options":["a","b"],"correctAnswer":"a"}]}"#;
    const SCENARIO_B: &str = r#"[{"_id":"1","subject":"Economics","question":"Q1","options":["a","b"],"correctAnswer":"a"}]"#;

    #[test]
    fn wrapped_payload_reaches_ready_with_one_card() {
        let mut app = QuizApp::with_loader(config(), FeedLoader::ready(parse_questions(SCENARIO_A)));
        assert!(app.feed.is_loading());
        assert!(app.poll_feed());
        assert_eq!(app.feed.questions().len(), 1);
        assert_eq!(app.question_cards().len(), 1);
    }

    #[test]
    fn bare_array_payload_gives_identical_result() {
        let mut a = QuizApp::with_loader(config(), FeedLoader::ready(parse_questions(SCENARIO_A)));
        let mut b = QuizApp::with_loader(config(), FeedLoader::ready(parse_questions(SCENARIO_B)));
        a.poll_feed();
        b.poll_feed();
        assert_eq!(a.feed, b.feed);
    }

    #[test]
    fn network_failure_shows_fixed_message_and_no_cards() {
        let err = FeedError::Network {
            url: "http://127.0.0.1:3000/questions".into(),
            reason: "connection refused".into(),
        };
        let mut app = QuizApp::with_loader(config(), FeedLoader::ready(Err(err)));
        app.poll_feed();
        assert_eq!(app.feed, FeedState::Failed("Failed to fetch questions".into()));
        assert!(app.question_cards().is_empty());
    }

    #[test]
    fn feed_transitions_only_once() {
        let mut app = loaded(vec![question("1", "Economics")]);
        let ready = app.feed.clone();
        assert!(!app.poll_feed());
        assert_eq!(app.feed, ready);
    }

    #[test]
    fn wrong_then_right_then_locked() {
        let mut app = loaded(parse_questions(SCENARIO_A).unwrap());
        assert!(app.select_option("1", "b"));
        assert!(app.select_option("1", "a"));
        assert!(!app.select_option("1", "b"));

        let state = app.answers.state_for("1");
        assert!(state.is_correct());
        assert_eq!(state.selected(), Some("a"));
        assert!(state.was_attempted("b"));
        assert_eq!(state.mark("b"), OptionMark::Attempted);
    }

    #[test]
    fn subject_filter_narrows_and_restores() {
        let mut app = loaded(vec![
            question("1", "Economics"),
            question("2", "Soil Science"),
        ]);
        app.select_subject(SubjectFilter::Subject("Soil Science".into()));
        let ids: Vec<&str> = app.visible_questions().into_iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        app.select_subject(SubjectFilter::All);
        let ids: Vec<&str> = app.visible_questions().into_iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn answers_survive_filter_changes() {
        let mut app = loaded(vec![
            question("1", "Economics"),
            question("2", "Soil Science"),
        ]);
        app.select_option("2", "b");
        app.select_subject(SubjectFilter::Subject("Economics".into()));
        app.select_subject(SubjectFilter::All);
        assert_eq!(app.answers.state_for("2").selected(), Some("b"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn shutdown_cancels_a_pending_fetch() {
        let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();
        let loader = FeedLoader::spawn_with(move || {
            let _ = release_rx.recv();
            Ok(Vec::new())
        });
        let mut app = QuizApp::with_loader(config(), loader);
        assert!(!app.poll_feed());
        app.shutdown();
        let _ = release_tx.send(());
        assert!(!app.poll_feed());
        assert!(app.feed.is_loading());
    }
}
