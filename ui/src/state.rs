use eyesentry_business::{AuthProvider, AuthState, BusinessConfig};

use crate::api::{self, ApiEvent, ApiReceiver, ApiSender};
use crate::pages::UsersPageState;
use crate::widgets::LoginForm;

/// The main application state.
///
/// Note: We manually implement Default because the api channel
/// doesn't implement Default.
pub struct State {
    pub config: BusinessConfig,
    pub auth: AuthState,
    pub login_form: LoginForm,
    pub users: UsersPageState,
    api_tx: ApiSender,
    api_rx: ApiReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let (api_tx, api_rx) = api::api_channel();

        Self {
            config,
            auth: AuthState::default(),
            login_form: LoginForm::default(),
            users: UsersPageState::default(),
            api_tx,
            api_rx,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url, "test-anon-key"))
    }

    pub fn api_sender(&self) -> ApiSender {
        self.api_tx.clone()
    }

    /// Applies every result that arrived since the last frame.
    pub fn poll_api_events(&mut self) {
        while let Ok(event) = self.api_rx.try_recv() {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::SignedIn(session) => {
                self.auth.sign_in_success(session);
                self.login_form.clear();
                self.users = UsersPageState::default();
            }
            ApiEvent::SignInFailed(message) => self.auth.sign_in_failed(message),
            // Rows requested before a sign-out are stale.
            ApiEvent::RowsLoaded { table, result } if self.auth.current_user().is_some() => {
                self.users.apply_rows(table, result);
            }
            ApiEvent::RowsLoaded { table, .. } => {
                log::debug!("Dropping {table} rows received while signed out");
            }
        }
    }

    pub fn submit_sign_in(&mut self, ctx: &egui::Context) {
        if self.auth.is_pending() {
            return;
        }
        self.auth.start_sign_in();
        api::sign_in(
            &self.config,
            self.login_form.email.trim(),
            &self.login_form.password,
            self.api_sender(),
            ctx.clone(),
        );
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.auth.session() {
            api::sign_out(&self.config, session);
        }
        self.auth.sign_out();
        self.users = UsersPageState::default();
    }
}
