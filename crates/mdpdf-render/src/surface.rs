//! The drawing surface the renderer writes to.
//!
//! [`Surface`] is the document-generation facility: a cursor-based page
//! model in the style of classic PDF writers. Calls are ordered and mutate
//! the current font, colors, and write position. [`PdfSurface`] produces a
//! real document; [`Recorder`] keeps a log of drawing operations.
//!
//! [`PdfSurface`]: crate::PdfSurface

use mdpdf_core::{FontFace, Rgb};

/// A cursor-based drawing surface. Units are millimetres, font sizes points.
pub trait Surface {
    /// Select the active font face and size.
    fn set_font(&mut self, face: FontFace, size: f32);

    /// Color used for text.
    fn set_text_color(&mut self, color: Rgb);

    /// Color used to fill cell backgrounds.
    fn set_fill_color(&mut self, color: Rgb);

    /// Color used for cell borders.
    fn set_draw_color(&mut self, color: Rgb);

    /// Draw a single-line cell at the cursor and move the cursor right by `width`.
    fn cell(&mut self, width: f32, height: f32, text: &str, border: bool, fill: bool);

    /// Draw text wrapped to the full usable width, one `height` per line,
    /// and move the cursor to the start of the next line.
    fn multi_cell(&mut self, height: f32, text: &str);

    /// Move the cursor to the left margin, `height` lower.
    fn ln(&mut self, height: f32);

    /// Page width between the margins.
    fn usable_width(&self) -> f32;
}

/// A drawing operation captured by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Wrapped text from [`Surface::multi_cell`]
    Text {
        face: FontFace,
        size: f32,
        color: Rgb,
        height: f32,
        text: String,
    },
    /// Single cell from [`Surface::cell`]
    Cell {
        face: FontFace,
        size: f32,
        color: Rgb,
        fill_color: Rgb,
        draw_color: Rgb,
        width: f32,
        height: f32,
        text: String,
        border: bool,
        fill: bool,
    },
    /// Line advance from [`Surface::ln`]
    Ln(f32),
}

impl Op {
    /// Text drawn by the operation, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Op::Text { text, .. } | Op::Cell { text, .. } => Some(text.as_str()),
            Op::Ln(_) => None,
        }
    }
}

/// A surface that records operations instead of drawing them.
///
/// # Example
///
/// ```
/// use mdpdf_render::{Op, Recorder, Surface};
///
/// let mut rec = Recorder::new(190.0);
/// rec.multi_cell(6.0, "hello");
/// rec.ln(3.0);
/// assert_eq!(rec.texts(), vec!["hello"]);
/// assert_eq!(rec.ops().last(), Some(&Op::Ln(3.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Recorder {
    usable_width: f32,
    face: FontFace,
    size: f32,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
    ops: Vec<Op>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(190.0)
    }
}

impl Recorder {
    /// Create a recorder with the given usable width.
    pub fn new(usable_width: f32) -> Self {
        Self {
            usable_width,
            face: FontFace::Regular,
            size: 12.0,
            text_color: Rgb::BLACK,
            fill_color: Rgb::WHITE,
            draw_color: Rgb::BLACK,
            ops: Vec::new(),
        }
    }

    /// All recorded operations in order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Take the recorded operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Text of every text and cell operation, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops.iter().filter_map(Op::text).collect()
    }
}

impl Surface for Recorder {
    fn set_font(&mut self, face: FontFace, size: f32) {
        self.face = face;
        self.size = size;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    fn cell(&mut self, width: f32, height: f32, text: &str, border: bool, fill: bool) {
        self.ops.push(Op::Cell {
            face: self.face,
            size: self.size,
            color: self.text_color,
            fill_color: self.fill_color,
            draw_color: self.draw_color,
            width,
            height,
            text: text.to_string(),
            border,
            fill,
        });
    }

    fn multi_cell(&mut self, height: f32, text: &str) {
        self.ops.push(Op::Text {
            face: self.face,
            size: self.size,
            color: self.text_color,
            height,
            text: text.to_string(),
        });
    }

    fn ln(&mut self, height: f32) {
        self.ops.push(Op::Ln(height));
    }

    fn usable_width(&self) -> f32 {
        self.usable_width
    }
}
