//! Build metadata, populated by `build.rs`.
//!
//! Display format is `{channel}:{info}`:
//! - Staging: `staging:{commit}`
//! - Test/Local: `dev:{commit}`
//! - Prod: `stable:{version}`

/// Deployment environment decided at runtime (services, CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Local,
    Test,
    Staging,
    Prod,
}

impl RuntimeEnv {
    /// Environments where secrets may fall back to development defaults.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Local | Self::Test)
    }
}

pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Short git commit hash, or `unknown` outside a checkout.
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Channel label and info string chosen by compile-time features (UI builds).
pub fn env_version_info() -> (&'static str, &'static str) {
    if cfg!(feature = "env_staging") {
        ("staging", build_commit())
    } else if cfg!(feature = "env_test") {
        ("dev", build_commit())
    } else {
        ("stable", build_version())
    }
}

pub fn format_env_version() -> String {
    let (channel, info) = env_version_info();
    format!("{channel}:{info}")
}

/// Version string for an environment known only at runtime.
pub fn format_version_for_runtime_env(env: RuntimeEnv) -> String {
    match env {
        RuntimeEnv::Staging => format!("staging:{}", build_commit()),
        RuntimeEnv::Test | RuntimeEnv::Local => format!("dev:{}", build_commit()),
        RuntimeEnv::Prod => format!("stable:{}", build_version()),
    }
}
