use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::EmailError;

/// Request body as received. Fields keep their raw JSON so a wrongly typed
/// field can be rejected on its own.
#[derive(Debug, Clone, Default)]
pub struct EmailRequest {
    fields: Map<String, Value>,
}

/// One address or a list, forwarded to the provider in the shape it came in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(address) if !address.is_empty() => Some(Self::One(address)),
            Value::Array(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    Value::String(address) if !address.is_empty() => Some(address),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::Many),
            _ => None,
        }
    }

    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Self::One(address) => vec![address.as_str()],
            Self::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addresses().join(", "))
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::One(address.to_owned())
    }
}

/// A validated message ready for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: Recipients,
    pub subject: String,
    pub html: String,
}

impl EmailRequest {
    /// Parses a raw body. Anything that is not a JSON object counts as an
    /// empty request, so it fails validation rather than parsing.
    pub fn from_body(body: &[u8]) -> Self {
        let fields = match serde_json::from_slice(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        Self { fields }
    }

    /// Every field must be present, non-null and non-empty. A field of the
    /// wrong type is reported alongside the absent ones.
    pub fn validate(mut self) -> Result<EmailMessage, EmailError> {
        let mut missing = Vec::new();

        let to = self.fields.remove("to").and_then(Recipients::from_value);
        if to.is_none() {
            missing.push("to");
        }
        let mut text = |name: &'static str| match self.fields.remove(name) {
            Some(Value::String(value)) if !value.is_empty() => Some(value),
            _ => {
                missing.push(name);
                None
            }
        };
        let subject = text("subject");
        let html = text("html");

        match (to, subject, html) {
            (Some(to), Some(subject), Some(html)) => Ok(EmailMessage { to, subject, html }),
            _ => Err(EmailError::Validation { missing }),
        }
    }
}
