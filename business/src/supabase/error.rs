use crate::session::ProviderErrorBody;

/// Errors talking to the managed database.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// Non-2xx response; `message` is the provider's own message when it sent one.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(String),
}

impl SupabaseError {
    pub(crate) fn from_response_body(status: u16, body: &[u8]) -> Self {
        let message = ProviderErrorBody::message_from_bytes(body).unwrap_or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_owned();
            if text.is_empty() {
                format!("request failed with status {status}")
            } else {
                text
            }
        });
        Self::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}
