use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::app_config::TranslationConfig;
use crate::errors::TranslationError;
use crate::providers::Translator;
use crate::translation::TranslationOutcome;

/// Client for the `translate_a/single` web endpoint.
///
/// One GET per sentence, no retries. The response is a nested JSON array
/// whose first element holds `[translated, original, ...]` fragments.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// Endpoint without query parameters
    endpoint: Url,
    /// `client` query parameter
    client_id: String,
    /// `dt` query parameter
    output_type: String,
    /// HTTP client for making requests
    http: Client,
}

impl GoogleTranslate {
    /// Create a client from the translation section of the config
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        Self::build(config, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client against `endpoint` with an explicit timeout
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let config = TranslationConfig {
            endpoint: endpoint.to_string(),
            ..TranslationConfig::default()
        };
        Self::build(&config, timeout)
    }

    fn build(config: &TranslationConfig, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid translation endpoint: {}", config.endpoint))?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint,
            client_id: config.client.clone(),
            output_type: config.output_type.clone(),
            http,
        })
    }

    /// Full request URL for one sentence
    pub fn request_url(&self, text: &str, source_language: &str, target_language: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", &self.client_id)
            .append_pair("sl", source_language)
            .append_pair("tl", target_language)
            .append_pair("dt", &self.output_type)
            .append_pair("q", text);
        url
    }

    async fn request(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let url = self.request_url(text, source_language, target_language);
        let response = self.http.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Http {
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network_error)?;
        parse_response(&body)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslationOutcome {
        match self.request(text, source_language, target_language).await {
            Ok(translated) => {
                debug!("Translated {} chars into {} chars", text.chars().count(), translated.chars().count());
                TranslationOutcome::Translated(translated)
            }
            Err(error) => {
                warn!("Translation failed: {}", error);
                TranslationOutcome::failed(error, text)
            }
        }
    }
}

fn network_error(error: reqwest::Error) -> TranslationError {
    if error.is_timeout() {
        TranslationError::Network(format!("request timed out: {}", error))
    } else {
        TranslationError::Network(error.to_string())
    }
}

/// Concatenate the translated fragments of a `translate_a/single` response
pub fn parse_response(body: &str) -> Result<String, TranslationError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    let sentences = value
        .as_array()
        .and_then(|root| root.first())
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TranslationError::MalformedResponse("expected a nested array of sentences".to_string())
        })?;

    let translated: String = sentences
        .iter()
        .filter_map(|sentence| sentence.as_array()?.first()?.as_str())
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::EmptyResult);
    }

    Ok(translated)
}
