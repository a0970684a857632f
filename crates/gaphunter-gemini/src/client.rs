//! HTTP client for the Gemini `generateContent` REST endpoint.
//!
//! Wraps `reqwest` with credential handling, the structured-output request
//! envelope, and extraction of the generated text. Each call is a single
//! request/response exchange; nothing is retried or cached.

use std::time::Duration;

use gaphunter_core::AppConfig;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeminiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when it is blank.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests. A client without an API key can be
/// constructed; every call on it fails with [`GeminiError::MissingCredential`].
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: Url,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeminiError::InvalidEndpoint`] if `base_url` and `model` do not
    /// form a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("gaphunter/0.1 (competitor-analysis)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = build_endpoint(base_url, model)?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ToOwned::to_owned),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`GeminiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeminiError> {
        Self::with_base_url(
            config.gemini_api_key.as_deref(),
            &config.gemini_model,
            config.gemini_timeout_secs,
            &config.gemini_base_url,
        )
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one structured-output request and returns the generated text.
    ///
    /// Returns `Ok(None)` when the model produced no text.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::MissingCredential`] before any request if no key is set.
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Envelope`] if the response body is not a
    ///   `generateContent` envelope.
    pub(crate) async fn generate(
        &self,
        operation: &'static str,
        prompt: &str,
        schema: &Value,
    ) -> Result<Option<String>, GeminiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingCredential)?;

        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        tracing::debug!(operation, model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GeminiError::Envelope)?;

        Ok(envelope.into_text())
    }
}

/// `{base}/v1beta/models/{model}:generateContent`, tolerating a trailing slash
/// on `base`.
fn build_endpoint(base_url: &str, model: &str) -> Result<Url, GeminiError> {
    let model = model.trim();
    if model.is_empty() || model.contains('/') {
        return Err(GeminiError::InvalidEndpoint(format!(
            "invalid model name '{model}'"
        )));
    }

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised)
        .map_err(|e| GeminiError::InvalidEndpoint(format!("invalid base URL '{base_url}': {e}")))?;

    base.join(&format!("v1beta/models/{model}:generateContent"))
        .map_err(|e| GeminiError::InvalidEndpoint(format!("cannot build endpoint: {e}")))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
