//! Endpoints of the managed database / auth provider.
//!
//! The console (via `ehttp`) and the migration tool (via `reqwest`) both
//! build their requests from the same `BusinessConfig`, which is created
//! once at startup and passed to whatever needs it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    supabase_url: String,
    anon_key: String,
}

impl BusinessConfig {
    pub fn new(supabase_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let supabase_url = supabase_url.into();
        Self {
            supabase_url: supabase_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.into(),
        }
    }

    pub fn supabase_url(&self) -> &str {
        &self.supabase_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn password_grant_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.supabase_url)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.supabase_url)
    }

    pub fn rpc_url(&self, procedure: &str) -> String {
        format!("{}/rest/v1/rpc/{procedure}", self.supabase_url)
    }

    /// Select-all URL for a table, ordered by `order_by` when given.
    pub fn table_url(&self, table: &str, order_by: Option<&str>) -> String {
        match order_by {
            Some(column) => format!(
                "{}/rest/v1/{table}?select=*&order={column}.asc",
                self.supabase_url
            ),
            None => format!("{}/rest/v1/{table}?select=*", self.supabase_url),
        }
    }

    /// Headers every request carries.
    pub fn public_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.anon_key.clone()),
            ("Content-Type", "application/json".to_owned()),
        ]
    }

    /// Headers for requests made on behalf of a signed-in user.
    pub fn session_headers(&self, access_token: &str) -> Vec<(&'static str, String)> {
        let mut headers = self.public_headers();
        headers.push(("Authorization", format!("Bearer {access_token}")));
        headers
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        let url = if cfg!(feature = "env_test") {
            "http://127.0.0.1:54321"
        } else if cfg!(feature = "env_staging") {
            option_env!("EYESENTRY_STAGING_SUPABASE_URL")
                .unwrap_or("https://staging.supabase.eyesentry.app")
        } else {
            option_env!("EYESENTRY_SUPABASE_URL").unwrap_or("https://supabase.eyesentry.app")
        };
        let anon_key = option_env!("EYESENTRY_SUPABASE_ANON_KEY").unwrap_or_default();
        Self::new(url, anon_key)
    }
}
