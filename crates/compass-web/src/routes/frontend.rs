//! Static frontend serving with single-page-app fallback.

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::path::Path;

use crate::state::AppState;

/// Fallback handler for everything outside `/api`.
///
/// Serves the requested file when it exists under the static directory,
/// otherwise `index.html` so client-side routing keeps working, otherwise a
/// plain-text notice that only the API is available.
pub async fn serve_frontend(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if !path.is_empty() && !path.split('/').any(|segment| segment == "..") {
        let file = state.static_dir.join(path);
        if file.is_file() {
            return serve_file(&file).await;
        }
    }

    let index = state.static_dir.join("index.html");
    if index.is_file() {
        return serve_file(&index).await;
    }

    (StatusCode::OK, "Frontend not available. API is running at /api").into_response()
}

async fn serve_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            ([(header::CONTENT_TYPE, content_type_for(path))], bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to read static file: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
