use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub question: String, // Enunciado
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Ciclo de vida de la única petición que llena la lista.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Ready(Vec<Question>),
    Failed(String),
}

impl FeedState {
    pub fn questions(&self) -> &[Question] {
        match self {
            FeedState::Ready(questions) => questions,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl SubjectFilter {
    /// Igualdad exacta, sensible a mayúsculas.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Subject(subject) => question.subject == *subject,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SubjectFilter::All => "All",
            SubjectFilter::Subject(subject) => subject.as_str(),
        }
    }
}
