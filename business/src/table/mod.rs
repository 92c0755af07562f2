//! Generic tabular data model used by every list page of the console.
//!
//! The model is split into small pieces:
//! - `record`: row access (`TableRecord`) and the open-map `Record`
//! - `column`: column specifications with optional render rules
//! - `filter`: the single-field, case-insensitive substring filter
//! - `layout`: the header/body description a widget draws from
//!
//! Nothing in here can fail. Missing fields render as blank cells and
//! never match a non-empty filter.

mod column;
mod filter;
mod layout;
mod record;

pub use column::{Column, RenderFn};
pub use filter::{FilterState, fold_case};
pub use layout::{DataTable, DEFAULT_FILTER_PLACEHOLDER, NO_RESULTS_MESSAGE, RenderedRow, TableBody, TableLayout};
pub use record::{FieldValue, ID_FIELD, Record, RowId, TableRecord};
