//! Single-field substring filter.

use super::record::FieldValue;

/// Case folding applied to both the filter text and field values.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// The filter text owned by one table instance.
///
/// Every edit replaces the text; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Mutable access for text inputs bound directly to the filter.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `value` passes the filter. A missing value counts as `""`.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let haystack = value.map(FieldValue::to_display_text).unwrap_or_default();
        fold_case(&haystack).contains(&fold_case(&self.text))
    }
}
