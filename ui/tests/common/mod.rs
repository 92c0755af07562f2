use std::time::Duration;

use eyesentry_ui::EyeSentryApp;
use eyesentry_ui::state::State;
use egui_kittest::Harness;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Default wait for an `ehttp` callback to land.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, EyeSentryApp> {
    /// App against a backend that accepts `admin@eyesentry.app` / `secret`.
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;
        mount_backend(&mock_server).await;

        let app = EyeSentryApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Steps frames until `label` appears or the budget runs out.
    pub async fn wait_for_label(&mut self, label: &str) -> bool {
        use kittest::Queryable;

        for _ in 0..40 {
            self.harness.step();
            if self.harness.query_by_label_contains(label).is_some() {
                return true;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        false
    }
}

async fn mount_backend(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(wiremock::matchers::body_partial_json(json!({ "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-token",
            "refresh_token": "refresh-token",
            "expires_in": 3600,
            "user": { "id": "admin-1", "email": "admin@eyesentry.app" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "p1",
                "email": "alice@clinic.org",
                "full_name": "Alice Moreau",
                "role": "doctor",
                "created_at": "2024-03-01T10:00:00Z"
            },
            {
                "id": "p2",
                "email": "bob@clinic.org",
                "full_name": "Bob Tanaka",
                "role": "nurse",
                "created_at": "2024-04-12T08:30:00Z"
            }
        ])))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}
