//! Shared test utilities for service integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use eyesentry_services::{
    config::Config,
    email::{EmailMessage, EmailSender, SendError},
    routes,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// How the mock provider answers.
#[derive(Clone)]
pub enum MockOutcome {
    Accept(Value),
    Reject { status: u16, message: Option<String> },
}

/// Email provider double that records every message it is asked to send.
#[derive(Clone)]
pub struct MockEmailSender {
    outcome: MockOutcome,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MockEmailSender {
    pub fn accepting() -> Self {
        Self::with_outcome(MockOutcome::Accept(json!({ "id": "email-123" })))
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::with_outcome(MockOutcome::Reject {
            status,
            message: message.map(str::to_owned),
        })
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mock sender lock poisoned").clone()
    }
}

impl EmailSender for MockEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<Value, SendError> {
        self.sent
            .lock()
            .expect("mock sender lock poisoned")
            .push(message.clone());

        match &self.outcome {
            MockOutcome::Accept(data) => Ok(data.clone()),
            MockOutcome::Reject { status, message } => Err(SendError::Provider {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn app(sender: MockEmailSender) -> Router {
    routes(sender, Config::new_for_test())
}

/// Sends one request through the router.
pub async fn call(app: Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .expect("Failed to create request");

    app.oneshot(request).await.expect("Failed to get response")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}
