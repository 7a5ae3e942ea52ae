//! TTPX Web Server
//!
//! Axum-based server for the single-page TTP extraction UI and its JSON API.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use ttpx_llm::GeminiClient;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/extract", post(routes::extract::extract))
        .route("/health", get(routes::health::health))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(client: Arc<GeminiClient>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(client);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_state() -> AppState {
        let client = GeminiClient::new("test-key", ttpx_llm::DEFAULT_MODEL).unwrap();
        AppState::new(Arc::new(client))
    }

    async fn body_string(body: Body) -> String {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_the_page_with_sample_report() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response.into_body()).await;
        assert!(html.contains("MITRE ATT&CK TTP Extractor"));
        assert!(html.contains("FIN7"));
    }

    #[tokio::test]
    async fn test_empty_report_is_rejected_without_an_outbound_call() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/extract")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text":"   \n"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = body_string(response.into_body()).await;
        assert!(message.contains("empty"));
    }

    #[tokio::test]
    async fn test_health_reports_the_configured_model() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("gemini-1.5-flash"));
    }
}
