//! List item rendering.
//!
//! Items are flat: one `- ` level, drawn with a bullet glyph prefix and the
//! body text style.

use crate::heading::render_block;
use crate::surface::Surface;
use mdpdf_config::TextStyle;

/// Bullet glyph used by the default prefix.
pub const BULLET: &str = "•";

/// Render a list item as `prefix` followed by its text.
pub fn render_list_item<S: Surface + ?Sized>(
    surface: &mut S,
    style: &TextStyle,
    prefix: &str,
    content: &str,
) {
    let text = format!("{}{}", prefix, content);
    render_block(surface, style, &text);
}
