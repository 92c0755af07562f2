//! Row access for the data table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable render identity of a row.
///
/// Owned per row rather than interned: ids change with every refresh.
pub type RowId = String;

/// Field that carries the identity of an open-map [`Record`].
pub const ID_FIELD: &str = "id";

/// A single field value, reduced to what a table cell can show.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Text coercion used both for cell content and for filtering.
    ///
    /// `Null` becomes the empty string.
    pub fn to_display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Null => String::new(),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => Self::Text(s.clone()),
            // Nested values are shown in their JSON form.
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Anything that can be shown as a table row.
///
/// Typed rows implement this by matching on the field name; rows loaded
/// from the database arrive as [`Record`].
pub trait TableRecord {
    fn row_id(&self) -> RowId;

    /// Returns `None` when the row has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// An open-ended row: field name to JSON value, identified by `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used for fixtures.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl TableRecord for Record {
    fn row_id(&self) -> RowId {
        self.fields
            .get(ID_FIELD)
            .map(|v| FieldValue::from(v).to_display_text())
            .unwrap_or_default()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).map(FieldValue::from)
    }
}
