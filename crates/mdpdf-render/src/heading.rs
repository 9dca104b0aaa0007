//! Heading rendering.
//!
//! Three bold tiers of decreasing size, each with its own spacing above and
//! below. Heading text wraps across the usable width.

use crate::surface::Surface;
use mdpdf_config::TextStyle;

/// Apply a text style to the surface.
pub(crate) fn apply<S: Surface + ?Sized>(surface: &mut S, style: &TextStyle) {
    surface.set_font(style.face, style.size);
    surface.set_text_color(style.color);
}

/// Render `text` as a block with spacing before and after.
pub fn render_block<S: Surface + ?Sized>(surface: &mut S, style: &TextStyle, text: &str) {
    apply(surface, style);
    if style.before > 0.0 {
        surface.ln(style.before);
    }
    surface.multi_cell(style.line_height, text);
    if style.after > 0.0 {
        surface.ln(style.after);
    }
}

/// Render a heading.
///
/// # Arguments
/// * `surface` - Drawing surface
/// * `style` - Style for this heading's tier
/// * `content` - Heading text without the `#` marker
pub fn render_heading<S: Surface + ?Sized>(surface: &mut S, style: &TextStyle, content: &str) {
    render_block(surface, style, content);
}
