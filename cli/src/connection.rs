//! Turns connection flags into a database client and admin credentials.

use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use eyesentry_business::BusinessConfig;
use eyesentry_business::supabase::{Credentials, SupabaseClient};

use crate::cli::ConnectionArgs;

fn required(value: Option<&String>, flag: &str, env: &str) -> Result<String> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => bail!("{env} is not set (pass --{flag} or export {env})"),
    }
}

impl ConnectionArgs {
    pub fn client(&self) -> Result<SupabaseClient> {
        let url = required(self.supabase_url.as_ref(), "supabase-url", "SUPABASE_URL")?;
        let anon_key = required(self.anon_key.as_ref(), "anon-key", "SUPABASE_ANON_KEY")?;
        Ok(SupabaseClient::new(BusinessConfig::new(url, anon_key)))
    }

    /// Admin credentials. Prompts for the password on an interactive
    /// terminal when it was not given.
    pub fn credentials(&self) -> Result<Credentials> {
        let email = required(self.email.as_ref(), "email", "ADMIN_EMAIL")?;
        let password = match &self.password {
            Some(password) if !password.is_empty() => password.clone(),
            _ if std::io::stdin().is_terminal() => {
                rpassword::prompt_password(format!("Password for {email}: "))
                    .context("Failed to read password")?
            }
            _ => bail!("ADMIN_PASSWORD is not set (pass --password or export ADMIN_PASSWORD)"),
        };
        Ok(Credentials { email, password })
    }
}
