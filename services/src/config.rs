use eyesentry_utils::version_info::RuntimeEnv;
use serde::Deserialize;
use std::env::vars;
use std::fmt::Display;
use tracing::info;

const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
const DEFAULT_EMAIL_FROM: &str = "EyeSentry <noreply@eyesentry.app>";

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum Env {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "staging")]
    Staging,
    #[serde(rename = "prod")]
    Prod,
}

impl From<&Env> for RuntimeEnv {
    fn from(env: &Env) -> Self {
        match env {
            Env::Local => RuntimeEnv::Local,
            Env::Test => RuntimeEnv::Test,
            Env::Staging => RuntimeEnv::Staging,
            Env::Prod => RuntimeEnv::Prod,
        }
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Staging => write!(f, "staging"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// The final, validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    server_addr: String,
    port: u16,
    resend_api_url: String,
    resend_api_key: String,
    email_from: String,
}

// Raw environment variables before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    env: Env,
    server_addr: Option<String>,
    port: Option<u16>,
    resend_api_url: Option<String>,
    resend_api_key: Option<String>,
    email_from: Option<String>,
}

impl Config {
    /// Configuration for unit and integration tests. Not for production use.
    pub fn new_for_test() -> Self {
        Self {
            env: Env::Test,
            server_addr: "127.0.0.1".to_owned(),
            port: 8080,
            resend_api_url: DEFAULT_RESEND_API_URL.to_owned(),
            resend_api_key: "re_test_key".to_owned(),
            email_from: DEFAULT_EMAIL_FROM.to_owned(),
        }
    }

    /// Test configuration pointing the email provider at `api_url`.
    pub fn new_for_test_with_provider(api_url: impl Into<String>) -> Self {
        Self {
            resend_api_url: api_url.into(),
            ..Self::new_for_test()
        }
    }

    pub fn environment(&self) -> &Env {
        &self.env
    }

    pub fn runtime_env(&self) -> RuntimeEnv {
        (&self.env).into()
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_local(&self) -> bool {
        matches!(self.env, Env::Local)
    }

    pub fn resend_api_url(&self) -> &str {
        &self.resend_api_url
    }

    pub fn resend_api_key(&self) -> &str {
        &self.resend_api_key
    }

    pub fn email_from(&self) -> &str {
        &self.email_from
    }

    /// Reads configuration from environment variables and applies
    /// environment-aware defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            env,
            server_addr,
            port,
            resend_api_url,
            resend_api_key,
            email_from,
        } = raw_config;

        let server_addr = match server_addr {
            Some(addr) => addr,
            None => {
                let default_addr = match env {
                    Env::Local => "127.0.0.1",
                    _ => "0.0.0.0",
                };
                info!(
                    "SERVER_ADDR not set, defaulting to {} for {} environment",
                    default_addr, env
                );
                default_addr.to_owned()
            }
        };

        let port = match port {
            Some(port) => port,
            None if matches!(env, Env::Local | Env::Test) => {
                info!("PORT not set, defaulting to 8080 for {} environment", env);
                8080
            }
            None => anyhow::bail!("PORT must be set for {} environment", env),
        };

        // The provider key is a real secret outside local development.
        let resend_api_key = match resend_api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ if RuntimeEnv::from(&env).is_development() => {
                info!(
                    "RESEND_API_KEY not set, email sending will fail in {} environment",
                    env
                );
                String::new()
            }
            _ => anyhow::bail!("RESEND_API_KEY must be set for {} environment", env),
        };

        Ok(Config {
            env,
            server_addr,
            port,
            resend_api_url: resend_api_url
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            resend_api_key,
            email_from: email_from.unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_owned()),
        })
    }
}
