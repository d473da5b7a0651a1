use super::{FeedError, parse_questions, validate_questions};
use crate::model::Question;

pub fn questions_url(base_url: &str) -> String {
    format!("{}/questions", base_url.trim().trim_end_matches('/'))
}

fn decode_body(body: &str) -> Result<Vec<Question>, FeedError> {
    let questions = parse_questions(body)?;
    validate_questions(&questions)?;
    Ok(questions)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(base_url: &str) -> Result<Vec<Question>, FeedError> {
    let url = questions_url(base_url);
    let client = reqwest::blocking::Client::new();

    let response = client.get(&url).send().map_err(|err| FeedError::Network {
        url: url.clone(),
        reason: err.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            url,
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|err| FeedError::Network {
        url: url.clone(),
        reason: format!("could not read body: {err}"),
    })?;

    decode_body(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(base_url: &str) -> Result<Vec<Question>, FeedError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = questions_url(base_url);
    let network = |reason: String| FeedError::Network {
        url: url.clone(),
        reason,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| network("no window in this context".into()))?;
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| network(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| network(format!("fetch rejected: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| network("fetch did not resolve to a Response".into()))?;

    if !response.ok() {
        return Err(FeedError::Status {
            url: url.clone(),
            status: response.status(),
        });
    }

    let text_js = match response.text() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(err) => Err(err),
    };
    let body = text_js
        .and_then(|v| {
            v.as_string()
                .ok_or_else(|| JsValue::from_str("response.text() did not return a string"))
        })
        .map_err(|err| network(format!("could not read body: {err:?}")))?;

    decode_body(&body)
}
