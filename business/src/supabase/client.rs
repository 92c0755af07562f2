use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::error::SupabaseError;
use crate::config::BusinessConfig;
use crate::session::{Session, TokenResponse};

/// Email/password pair used for the password grant.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a [`SupabaseClient::with_session`] scope.
#[derive(Debug)]
pub struct SessionScope<T> {
    pub output: T,
    /// Whether the closing sign-out succeeded.
    pub signed_out: bool,
}

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: BusinessConfig,
}

impl SupabaseClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: BusinessConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, SupabaseError> {
        let request = Self::with_headers(
            self.http.post(self.config.password_grant_url()),
            self.config.public_headers(),
        )
        .json(credentials);

        let bytes = Self::send(request).await?;
        let token: TokenResponse =
            serde_json::from_slice(&bytes).map_err(|e| SupabaseError::Parse(e.to_string()))?;

        log::debug!("Password grant succeeded for {}", token.user.display_name());
        Ok(Session::from_token_response(token, Utc::now()))
    }

    /// Invokes a database function. Void functions yield `Value::Null`.
    pub async fn rpc(
        &self,
        session: &Session,
        procedure: &str,
        params: &Value,
    ) -> Result<Value, SupabaseError> {
        let request = Self::with_headers(
            self.http.post(self.config.rpc_url(procedure)),
            self.config.session_headers(&session.access_token),
        )
        .json(params);

        let bytes = Self::send(request).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| SupabaseError::Parse(e.to_string()))
    }

    pub async fn sign_out(&self, session: &Session) -> Result<(), SupabaseError> {
        let request = Self::with_headers(
            self.http.post(self.config.logout_url()),
            self.config.session_headers(&session.access_token),
        );
        Self::send(request).await?;
        log::debug!("Signed out {}", session.user.display_name());
        Ok(())
    }

    /// Signs in, runs `body` with the session, then signs out whatever
    /// `body` returned.
    ///
    /// Only a failed sign-in is an error here; a failed sign-out is logged
    /// and reported through [`SessionScope::signed_out`].
    pub async fn with_session<T>(
        &self,
        credentials: &Credentials,
        body: impl AsyncFnOnce(&Session) -> T,
    ) -> Result<SessionScope<T>, SupabaseError> {
        let session = self.sign_in_with_password(credentials).await?;

        let output = body(&session).await;

        let signed_out = match self.sign_out(&session).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to sign out {}: {err}", session.user.display_name());
                false
            }
        };

        Ok(SessionScope { output, signed_out })
    }

    fn with_headers(
        mut request: reqwest::RequestBuilder,
        headers: Vec<(&'static str, String)>,
    ) -> reqwest::RequestBuilder {
        for (name, value) in headers {
            request = request.header(name, value);
        }
        request
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Vec<u8>, SupabaseError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(SupabaseError::from_response_body(status.as_u16(), &bytes))
        }
    }
}
