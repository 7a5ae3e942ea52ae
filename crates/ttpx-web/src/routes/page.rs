//! Page route handler.
//!
//! Serves the embedded single-page UI with the sample report preloaded.

use axum::response::{Html, IntoResponse};

const PAGE_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the extraction page.
pub async fn index() -> impl IntoResponse {
    Html(PAGE_HTML.replace("__SAMPLE_REPORT__", ttpx_core::report::SAMPLE_REPORT))
}
