//! Requests against the hosted auth provider and REST endpoints.
//!
//! `ehttp` callbacks run off the UI thread (or on the JS event loop on the
//! web), so results are posted back as [`ApiEvent`]s through a `flume`
//! channel that the app drains at the start of every frame.

use chrono::Utc;
use eyesentry_business::{BusinessConfig, ProviderErrorBody, Record, Session, TokenResponse};
use serde_json::json;

/// Result of a background request.
#[derive(Debug)]
pub enum ApiEvent {
    SignedIn(Session),
    SignInFailed(String),
    RowsLoaded {
        table: &'static str,
        result: Result<Vec<Record>, String>,
    },
}

pub type ApiSender = flume::Sender<ApiEvent>;
pub type ApiReceiver = flume::Receiver<ApiEvent>;

pub fn api_channel() -> (ApiSender, ApiReceiver) {
    flume::unbounded()
}

fn headers(pairs: Vec<(&'static str, String)>) -> ehttp::Headers {
    let mut headers = ehttp::Headers::default();
    for (name, value) in pairs {
        headers.insert(name, value);
    }
    headers
}

fn failure_message(response: &ehttp::Response) -> String {
    ProviderErrorBody::message_from_bytes(&response.bytes)
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}

/// Password sign-in. Emits `SignedIn` or `SignInFailed`.
pub fn sign_in(
    config: &BusinessConfig,
    email: &str,
    password: &str,
    tx: ApiSender,
    ctx: egui::Context,
) {
    let body = json!({ "email": email, "password": password });
    let request = ehttp::Request {
        headers: headers(config.public_headers()),
        ..ehttp::Request::post(
            config.password_grant_url(),
            serde_json::to_vec(&body).unwrap_or_default(),
        )
    };

    ehttp::fetch(request, move |result| {
        let event = match result {
            Ok(response) if response.ok => {
                match serde_json::from_slice::<TokenResponse>(&response.bytes) {
                    Ok(token) => ApiEvent::SignedIn(Session::from_token_response(token, Utc::now())),
                    Err(err) => {
                        log::error!("Unexpected sign-in response: {err}");
                        ApiEvent::SignInFailed("Unexpected response from auth provider".to_owned())
                    }
                }
            }
            Ok(response) => ApiEvent::SignInFailed(failure_message(&response)),
            Err(err) => ApiEvent::SignInFailed(err),
        };
        let _ = tx.send(event);
        ctx.request_repaint();
    });
}

/// Revokes the session server-side. The local state is cleared by the
/// caller regardless of the outcome.
pub fn sign_out(config: &BusinessConfig, session: &Session) {
    let request = ehttp::Request {
        headers: headers(config.session_headers(&session.access_token)),
        ..ehttp::Request::post(config.logout_url(), Vec::new())
    };

    ehttp::fetch(request, |result| match result {
        Ok(response) if response.ok => log::info!("Signed out"),
        Ok(response) => log::warn!("Sign out returned status {}", response.status),
        Err(err) => log::warn!("Sign out failed: {err}"),
    });
}

/// Loads every row of `table`. Emits `RowsLoaded`.
pub fn fetch_rows(
    config: &BusinessConfig,
    session: &Session,
    table: &'static str,
    order_by: Option<&str>,
    tx: ApiSender,
    ctx: egui::Context,
) {
    let request = ehttp::Request {
        headers: headers(config.session_headers(&session.access_token)),
        ..ehttp::Request::get(config.table_url(table, order_by))
    };

    ehttp::fetch(request, move |result| {
        let result = match result {
            Ok(response) if response.ok => serde_json::from_slice::<Vec<Record>>(&response.bytes)
                .map_err(|err| format!("Unexpected response: {err}")),
            Ok(response) => Err(failure_message(&response)),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            log::warn!("Loading {table} failed: {err}");
        }
        let _ = tx.send(ApiEvent::RowsLoaded { table, result });
        ctx.request_repaint();
    });
}
