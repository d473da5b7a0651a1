// src/data.rs

use serde::Deserialize;

#[cfg(not(target_arch = "wasm32"))]
const BASE_URL_VAR: &str = "QUIZ_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("embedded quiz config is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("embedded quiz config has an empty base_url")]
    MissingBaseUrl,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub base_url: String,
    pub subjects: Vec<String>,
}

/// Carga la configuración embebida y aplica la URL base externa si la hay
pub fn read_config() -> Result<QuizConfig, ConfigError> {
    let mut config = read_embedded_config()?;
    if let Some(url) = base_url_override() {
        log::info!("Using API base URL override: {url}");
        config.base_url = url;
    }
    Ok(config)
}

pub fn read_embedded_config() -> Result<QuizConfig, ConfigError> {
    let file_content = include_str!("data/quiz_config.yaml");
    let config: QuizConfig = serde_yaml::from_str(file_content)?;
    if normalize_url(&config.base_url).is_none() {
        return Err(ConfigError::MissingBaseUrl);
    }
    Ok(config)
}

fn normalize_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn base_url_from_build_env() -> Option<String> {
    option_env!("QUIZ_API_BASE_URL").and_then(normalize_url)
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_override() -> Option<String> {
    std::env::var(BASE_URL_VAR)
        .ok()
        .and_then(|v| normalize_url(&v))
        .or_else(base_url_from_build_env)
}

#[cfg(target_arch = "wasm32")]
fn base_url_override() -> Option<String> {
    base_url_from_build_env().or_else(base_url_from_meta)
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='quiz-api-base-url']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_url)
}
