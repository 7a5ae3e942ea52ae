//! Extraction route handler.
//!
//! One linear transaction per request: validate, one outbound completion
//! call, render the result or the failure.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::AppState;
use ttpx_core::TtpxError;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub result: String,
    pub model: String,
}

/// POST /api/extract - Run one extraction round trip.
pub async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, (StatusCode, String)> {
    let result = state.client.extract(&req.text).await.map_err(|e| {
        warn!(error = %e, "Extraction failed");
        (status_for(&e), e.to_string())
    })?;

    info!(result_chars = result.len(), "Extraction completed");

    Ok(Json(ExtractResponse {
        result,
        model: state.client.model().to_string(),
    }))
}

/// An empty submission is the caller's fault; everything else that can
/// happen here is an upstream failure.
fn status_for(error: &TtpxError) -> StatusCode {
    match error {
        TtpxError::EmptyReport => StatusCode::BAD_REQUEST,
        TtpxError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        TtpxError::Authentication(_)
        | TtpxError::ServiceUnavailable(_)
        | TtpxError::EmptyResult => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&TtpxError::EmptyReport), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&TtpxError::authentication("bad key")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&TtpxError::service_unavailable("timeout")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status_for(&TtpxError::EmptyResult), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&TtpxError::config("no key")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_request_and_response_shapes() {
        let req: ExtractRequest = serde_json::from_str(r#"{"text":"some report"}"#).unwrap();
        assert_eq!(req.text, "some report");

        let resp = ExtractResponse {
            result: "- Tactic: Initial Access (ID: TA0001)".to_string(),
            model: "gemini-1.5-flash".to_string(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["result"], "- Tactic: Initial Access (ID: TA0001)");
        assert_eq!(value["model"], "gemini-1.5-flash");
    }
}
