use super::FeedError;
use crate::model::Question;
use serde_json::Value;
use std::collections::HashSet;

/// Acepta `[...]` o `{ "questions": [...] }`.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, FeedError> {
    let value: Value = serde_json::from_str(body)?;
    let list = match value {
        Value::Object(mut map) => match map.remove("questions") {
            Some(list @ Value::Array(_)) => list,
            Some(other) => {
                return Err(FeedError::MalformedPayload(format!(
                    "`questions` field is {}, expected an array",
                    kind_of(&other)
                )));
            }
            None => {
                return Err(FeedError::MalformedPayload(
                    "object without a `questions` array".into(),
                ));
            }
        },
        list @ Value::Array(_) => list,
        other => {
            return Err(FeedError::MalformedPayload(format!(
                "top-level value is {}",
                kind_of(&other)
            )));
        }
    };

    serde_json::from_value(list).map_err(|err| FeedError::MalformedPayload(err.to_string()))
}

pub fn validate_questions(questions: &[Question]) -> Result<(), FeedError> {
    let mut seen = HashSet::new();
    for q in questions {
        if !seen.insert(q.id.as_str()) {
            return Err(FeedError::InvalidQuestion {
                id: q.id.clone(),
                reason: "duplicate id".into(),
            });
        }
        if !q.has_option(&q.correct_answer) {
            return Err(FeedError::InvalidQuestion {
                id: q.id.clone(),
                reason: format!("correct answer {:?} is not one of its options", q.correct_answer),
            });
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
