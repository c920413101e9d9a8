use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// The only hard failures of the UI router. A missing static file is never an
/// error (it triggers the SPA fallback); these two mean the bundled index
/// document itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("index.html not found in packaged assets for version {0}")]
    IndexMissing(String),

    #[error("index.html is not valid UTF-8: {0}")]
    IndexEncoding(#[from] std::string::FromUtf8Error),
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
