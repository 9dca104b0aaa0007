//! Code line rendering.
//!
//! Lines inside a fence are drawn one at a time in the monospace face and
//! muted color, whitespace intact. Tabs become spaces at fixed stops. The
//! text color is restored afterward so following blocks start from the
//! default.

use crate::heading::apply;
use crate::surface::Surface;
use crate::text::expand_tabs;
use mdpdf_config::TextStyle;
use mdpdf_core::Rgb;

/// Columns between tab stops in code lines.
pub const TAB_WIDTH: usize = 4;

/// Render one verbatim code line.
pub fn render_code_line<S: Surface + ?Sized>(
    surface: &mut S,
    style: &TextStyle,
    restore: Rgb,
    line: &str,
) {
    apply(surface, style);
    surface.multi_cell(style.line_height, &expand_tabs(line, TAB_WIDTH));
    surface.set_text_color(restore);
}
