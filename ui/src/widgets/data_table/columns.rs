//! Column sizing for the data table widget.

use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const FILTER_WIDTH: f32 = 240.0;
const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Every column is resizable; the last one fills the remaining width.
pub fn table_columns(count: usize) -> Vec<Column> {
    (0..count)
        .map(|index| {
            if index + 1 == count {
                Column::remainder().at_least(MIN_COLUMN_WIDTH)
            } else {
                Column::auto().at_least(MIN_COLUMN_WIDTH).resizable(true)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_column_per_header() {
        assert_eq!(table_columns(3).len(), 3);
        assert!(table_columns(0).is_empty());
    }
}
