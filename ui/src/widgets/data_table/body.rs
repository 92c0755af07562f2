//! Body rendering for the data table widget.

use egui::{Frame, Margin, RichText, Stroke, Ui};
use egui_extras::TableBody;
use eyesentry_business::table::RenderedRow;

use super::columns::ROW_HEIGHT;

/// Renders one table row per displayed record, cells in column order.
pub fn render_rows(body: TableBody<'_>, rows: &[RenderedRow]) {
    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
        let rendered = &rows[row.index()];
        for cell in &rendered.cells {
            row.col(|ui| {
                ui.label(cell);
            });
        }
    });
}

/// Full-width strip shown below the header when nothing is displayed.
///
/// `egui_extras` tables have no column spans, so the strip is drawn
/// after the table across the whole available width.
pub fn render_placeholder(ui: &mut Ui, message: &str) {
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    Frame::NONE
        .stroke(Stroke::new(1.0, border_color))
        .inner_margin(Margin::symmetric(8, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(message).weak());
            });
        });
}
