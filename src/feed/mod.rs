mod loader;
mod payload;
mod remote;

pub use loader::FeedLoader;
pub use payload::{parse_questions, validate_questions};
pub use remote::{fetch_questions, questions_url};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch questions";
pub const MALFORMED_MESSAGE: &str = "Received malformed question data";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    MalformedPayload(String),
    #[error("question {id} is invalid: {reason}")]
    InvalidQuestion { id: String, reason: String },
    #[error("question loader stopped without a result")]
    Interrupted,
}

impl FeedError {
    /// Texto que ve el usuario; el detalle solo va al log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FeedError::Network { .. }
            | FeedError::Status { .. }
            | FeedError::Parse(_)
            | FeedError::Interrupted => FETCH_FAILED_MESSAGE,
            FeedError::MalformedPayload(_) | FeedError::InvalidQuestion { .. } => {
                MALFORMED_MESSAGE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_share_the_fetch_message() {
        let err = FeedError::Network {
            url: "http://x/questions".into(),
            reason: "connection refused".into(),
        };
        assert_eq!(err.user_message(), "Failed to fetch questions");
        let err = FeedError::Status {
            url: "http://x/questions".into(),
            status: 502,
        };
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(FeedError::Interrupted.user_message(), FETCH_FAILED_MESSAGE);
        let err = FeedError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(matches!(err, FeedError::Parse(_)));
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn data_errors_get_their_own_message() {
        let err = FeedError::InvalidQuestion {
            id: "1".into(),
            reason: "correct answer missing".into(),
        };
        assert_eq!(err.user_message(), MALFORMED_MESSAGE);
        assert!(err.to_string().contains("question 1"));
    }
}
