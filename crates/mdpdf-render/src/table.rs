//! Table rendering.
//!
//! Every column gets the same width: the usable page width divided by the
//! header's cell count. Cells are single-line, bordered, and filled; text
//! past the configured character limit is clipped.

use crate::heading::apply;
use crate::surface::Surface;
use crate::text::truncate_chars;
use log::debug;
use mdpdf_config::TableStyle;
use mdpdf_core::{Rgb, Table};

/// Width of each column for `table` on `usable_width`.
pub fn column_width(table: &Table, usable_width: f32) -> f32 {
    usable_width / table.column_count() as f32
}

/// Render a buffered table, leaving the cursor below the last row.
///
/// Rows with more or fewer cells than the header are drawn as they are,
/// each cell at the header-derived column width. Spacing after the table is
/// up to the caller.
pub fn render_table<S: Surface + ?Sized>(
    surface: &mut S,
    style: &TableStyle,
    restore: Rgb,
    table: &Table,
) {
    if table.is_empty() {
        return;
    }

    let col_width = column_width(table, surface.usable_width());
    debug!(
        "Table: {} rows, {} columns of {:.1}mm",
        table.len(),
        table.column_count(),
        col_width
    );

    surface.set_draw_color(style.border);
    for (row_idx, row) in table.rows.iter().enumerate() {
        let (text_style, fill) = if row_idx == 0 {
            (&style.header, style.header_fill)
        } else {
            (&style.body, style.body_fill)
        };
        apply(surface, text_style);
        surface.set_fill_color(fill);

        for cell in row {
            let text = truncate_chars(cell, style.max_cell_chars);
            surface.cell(col_width, style.row_height, text, true, true);
        }
        surface.ln(style.row_height);
    }

    surface.set_text_color(restore);
}
