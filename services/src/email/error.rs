use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Fallback when the provider gave no usable message.
pub const GENERIC_SEND_FAILURE: &str = "Failed to send email";

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// The provider's own message when it gave one.
    #[error("{0}")]
    SendFailure(String),
}

impl EmailError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::SendFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        match &self {
            Self::SendFailure(message) => tracing::error!(error = %message, "Email send failed"),
            _ => tracing::warn!(error = %self, "Rejected email request"),
        }

        let body = json!({
            "success": false,
            "error": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
