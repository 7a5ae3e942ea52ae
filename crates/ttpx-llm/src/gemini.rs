//! Gemini HTTP client for TTP extraction.
//!
//! Uses the `generateContent` endpoint of the Google Generative Language
//! API. Each extraction is a single bounded round trip.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ttpx_core::{prompt, report, TtpxError, TtpxResult};

/// Base URL of the Generative Language API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Bounded wait on the outbound call. A service that takes longer is
/// treated as unavailable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini completion client.
///
/// The credential is supplied at construction; the client never reads the
/// process environment.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client with the given credential and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> TtpxResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TtpxError::config("Gemini API key is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TtpxError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: DEFAULT_API_BASE.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        })
    }

    /// The model this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Extract MITRE ATT&CK TTPs from one threat report.
    ///
    /// Issues exactly one outbound call and returns either the model's text
    /// or a terminal error. Empty reports are rejected before the call.
    pub async fn extract(&self, report_text: &str) -> TtpxResult<String> {
        let report_text = report::validate(report_text)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt::extraction_prompt(report_text),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, report_chars = report_text.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TtpxError::service_unavailable(format!("Failed to reach Gemini API: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TtpxError::service_unavailable(format!("Failed to parse Gemini response: {e}")))?;

        let text = response_text(body)?;
        debug!(result_chars = text.len(), "Received extraction result");

        Ok(text)
    }
}

/// Map a non-success HTTP status to the error taxonomy.
///
/// Gemini reports an invalid key either as 401/403 or as a 400 whose
/// message names the API key.
fn error_for_status(status: StatusCode, body: &str) -> TtpxError {
    let message = serde_json::from_str::<GeminiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    let key_rejected = status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (status == StatusCode::BAD_REQUEST && message.contains("API key"));

    if key_rejected {
        TtpxError::authentication(message)
    } else {
        TtpxError::service_unavailable(format!("Gemini API error ({status}): {message}"))
    }
}

/// Pull the answer text out of a successful response.
fn response_text(response: GenerateContentResponse) -> TtpxResult<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(TtpxError::EmptyResult);
    }

    Ok(text.to_string())
}
