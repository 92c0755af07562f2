use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::error::{EmailError, GENERIC_SEND_FAILURE};
use super::message::EmailRequest;
use super::sender::EmailSender;
use crate::AppState;

pub const EMAIL_ROUTE: &str = "/api/send-email";

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Handles every method on [`EMAIL_ROUTE`].
///
/// `Access-Control-Allow-Origin` is added to all responses by the router.
#[tracing::instrument(skip_all, fields(method = %method))]
pub async fn send_email<E: EmailSender>(
    State(state): State<AppState<E>>,
    method: Method,
    body: Bytes,
) -> Result<Response, EmailError> {
    if method == Method::OPTIONS {
        return Ok(preflight());
    }
    if method != Method::POST {
        return Err(EmailError::MethodNotAllowed);
    }

    let message = EmailRequest::from_body(&body).validate()?;

    let data = state.sender.send(&message).await.map_err(|err| {
        tracing::error!(error = %err, "Email provider call failed");
        EmailError::SendFailure(
            err.provider_message()
                .unwrap_or(GENERIC_SEND_FAILURE)
                .to_owned(),
        )
    })?;

    Ok((StatusCode::OK, Json(json!({ "success": true, "data": data }))).into_response())
}

fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
