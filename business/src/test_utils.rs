//! Mock managed-database server for business layer tests.
//!
//! # Example
//!
//! ```ignore
//! let mock = MockSupabase::start().await;
//! mock.mock_sign_in("admin@eyesentry.app", "token").await;
//! mock.mock_rpc("add_column", 204, None).await;
//! mock.mock_sign_out(204).await;
//!
//! let report = run_migration(&mock.client(), &mock.credentials(), &migration).await;
//! assert_eq!(mock.rpc_calls().await, vec!["add_column"]);
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use crate::session::{AuthUser, Session};
use crate::supabase::{Credentials, SupabaseClient};
use crate::BusinessConfig;

pub const TEST_ANON_KEY: &str = "test-anon-key";

pub struct MockSupabase {
    pub server: MockServer,
}

impl MockSupabase {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> BusinessConfig {
        BusinessConfig::new(self.server.uri(), TEST_ANON_KEY)
    }

    pub fn client(&self) -> SupabaseClient {
        SupabaseClient::new(self.config())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: "admin@eyesentry.app".to_owned(),
            password: "secret".to_owned(),
        }
    }

    /// A session that was never issued by the mock; fine for endpoints
    /// that only check the header is present.
    pub fn session(token: &str) -> Session {
        Session {
            access_token: token.to_owned(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser {
                id: "user-1".to_owned(),
                email: Some("admin@eyesentry.app".to_owned()),
            },
        }
    }

    pub async fn mock_sign_in(&self, email: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", TEST_ANON_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": token,
                "refresh_token": "refresh",
                "expires_in": 3600,
                "token_type": "bearer",
                "user": { "id": "user-1", "email": email }
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_sign_in_rejected(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": message
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_rpc(&self, procedure: &str, status: u16, body: Option<Value>) {
        let template = match body {
            Some(body) => ResponseTemplate::new(status).set_body_json(body),
            None => ResponseTemplate::new(status),
        };
        Mock::given(method("POST"))
            .and(path(format!("/rest/v1/rpc/{procedure}")))
            .and(header("apikey", TEST_ANON_KEY))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_rpc_failure(&self, procedure: &str, status: u16, message: &str) {
        self.mock_rpc(
            procedure,
            status,
            Some(json!({ "code": "P0001", "message": message })),
        )
        .await;
    }

    pub async fn mock_sign_out(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn sign_out_calls(&self) -> usize {
        self.paths()
            .await
            .iter()
            .filter(|p| p.as_str() == "/auth/v1/logout")
            .count()
    }

    /// Procedures invoked, in call order.
    pub async fn rpc_calls(&self) -> Vec<String> {
        self.paths()
            .await
            .into_iter()
            .filter_map(|p| p.strip_prefix("/rest/v1/rpc/").map(str::to_owned))
            .collect()
    }

    async fn paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.path().to_owned())
            .collect()
    }
}
