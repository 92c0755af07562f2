//! Column specifications.

use std::fmt;
use std::sync::Arc;

use ustr::Ustr;

use super::record::TableRecord;

/// Maps a row to the text shown in one cell.
pub type RenderFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Identity of a column.
///
/// `Accessor` both identifies the column and addresses a row field.
/// `Id` only identifies it; such a column needs a render rule to show
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ColumnKey {
    Accessor(Ustr),
    Id(Ustr),
}

impl ColumnKey {
    fn as_ustr(self) -> Ustr {
        match self {
            Self::Accessor(key) | Self::Id(key) => key,
        }
    }
}

/// How one field is labelled and rendered.
pub struct Column<R> {
    key: ColumnKey,
    header: String,
    render: Option<RenderFn<R>>,
}

impl<R> Column<R> {
    /// A column showing the raw value of `field`.
    pub fn accessor(field: &str, header: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Accessor(Ustr::from(field)),
            header: header.into(),
            render: None,
        }
    }

    /// A column identified by `id` that does not address a field.
    pub fn display(id: &str, header: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::Id(Ustr::from(id)),
            header: header.into(),
            render: None,
        }
    }

    pub fn with_render(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> Ustr {
        self.key.as_ustr()
    }

    pub fn accessor_key(&self) -> Option<Ustr> {
        match self.key {
            ColumnKey::Accessor(key) => Some(key),
            ColumnKey::Id(_) => None,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

impl<R: TableRecord> Column<R> {
    /// Cell content: the render rule if present, else the raw field
    /// addressed by the accessor key, else blank.
    pub fn cell_text(&self, row: &R) -> String {
        if let Some(render) = &self.render {
            return render(row);
        }
        self.accessor_key()
            .and_then(|key| row.field(key.as_str()))
            .map(|value| value.to_display_text())
            .unwrap_or_default()
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.is_some())
            .finish()
    }
}
