//! PDF output via `printpdf`.
//!
//! [`PdfSurface`] keeps a top-left based cursor in millimetres and converts
//! to PDF's bottom-left coordinates when drawing. A page is added whenever
//! the next line or cell would cross the break trigger.

use crate::fonts::{FontData, FontMetrics, FontSet, PT_TO_MM};
use crate::surface::Surface;
use crate::text::wrap_text;
use log::{debug, trace, warn};
use mdpdf_config::PageConfig;
use mdpdf_core::{FontFace, MdpdfError, Result, Rgb};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect,
};

/// Horizontal padding inside cells.
const CELL_MARGIN: f32 = 1.0;

/// Border line width in millimetres.
const LINE_WIDTH: f32 = 0.2;

const LAYER_NAME: &str = "Layer 1";

/// A registered face: the PDF font reference and its metrics.
struct Face {
    font: IndirectFontRef,
    metrics: FontMetrics,
}

/// A paginated PDF document under construction.
pub struct PdfSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    page: PageConfig,
    regular: Face,
    bold: Face,
    mono: Face,
    face: FontFace,
    size: f32,
    text_color: Rgb,
    fill_color: Rgb,
    draw_color: Rgb,
    x: f32,
    y: f32,
    pages: usize,
}

impl PdfSurface {
    /// Begin a document with one empty page and register `fonts`.
    pub fn new(title: &str, page: PageConfig, fonts: &FontSet) -> Result<Self> {
        let (doc, page_index, layer_index) =
            PdfDocument::new(title, Mm(page.width), Mm(page.height), LAYER_NAME);

        let regular = register(&doc, &fonts.regular)?;
        let bold = register(&doc, &fonts.bold)?;
        let mono = match &fonts.mono {
            Some(data) => register(&doc, data)?,
            None => Face {
                font: doc
                    .add_builtin_font(BuiltinFont::Courier)
                    .map_err(|e| MdpdfError::Render(format!("Cannot register Courier: {}", e)))?,
                metrics: FontMetrics::courier(),
            },
        };
        debug!(
            "Registered {} fonts, page {}x{}mm",
            fonts.family, page.width, page.height
        );

        let layer = doc.get_page(page_index).get_layer(layer_index);

        Ok(Self {
            doc,
            layer,
            page,
            regular,
            bold,
            mono,
            face: FontFace::Regular,
            size: 12.0,
            text_color: Rgb::BLACK,
            fill_color: Rgb::WHITE,
            draw_color: Rgb::BLACK,
            x: page.margin,
            y: page.margin,
            pages: 1,
        })
    }

    /// Number of pages so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Characters of `text` that `face` has no glyph for.
    ///
    /// For builtin Courier these are the characters outside WinAnsi, which
    /// printpdf drops when encoding.
    pub fn missing_glyphs(&self, face: FontFace, text: &str) -> Vec<char> {
        self.face(face).metrics.missing_chars(text)
    }

    /// Serialize the finished document.
    pub fn finish(self) -> Result<Vec<u8>> {
        debug!("Serializing {} pages", self.pages);
        self.doc
            .save_to_bytes()
            .map_err(|e| MdpdfError::Render(format!("Cannot serialize PDF: {}", e)))
    }

    fn current(&self) -> &Face {
        self.face(self.face)
    }

    fn face(&self, face: FontFace) -> &Face {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Mono => &self.mono,
        }
    }

    fn add_page(&mut self) {
        let (page_index, layer_index) =
            self.doc
                .add_page(Mm(self.page.width), Mm(self.page.height), LAYER_NAME);
        self.layer = self.doc.get_page(page_index).get_layer(layer_index);
        self.pages += 1;
        self.y = self.page.margin;
        trace!("Page {}", self.pages);
    }

    /// Start a new page if `height` more would cross the break trigger.
    fn break_if_needed(&mut self, height: f32) {
        if self.y + height > self.page.break_trigger() && self.y > self.page.margin {
            let x = self.x;
            self.add_page();
            self.x = x;
        }
    }

    /// Draw `text` in a box of `height` whose top-left is the cursor.
    fn draw_text(&self, text: &str, height: f32) {
        if text.is_empty() {
            return;
        }
        let missing = self.current().metrics.missing_chars(text);
        if !missing.is_empty() {
            warn!(
                "{} font cannot draw {:?} in {:?}; those characters will be lost",
                self.face, missing, text
            );
        }
        let baseline = self.y + 0.5 * height + 0.3 * self.size * PT_TO_MM;
        self.layer.set_fill_color(pdf_color(self.text_color));
        self.layer.use_text(
            text,
            self.size,
            Mm(self.x + CELL_MARGIN),
            Mm(self.page.height - baseline),
            &self.current().font,
        );
    }
}

impl Surface for PdfSurface {
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
        self.break_if_needed(height);

        let mode = match (border, fill) {
            (true, true) => Some(PaintMode::FillStroke),
            (true, false) => Some(PaintMode::Stroke),
            (false, true) => Some(PaintMode::Fill),
            (false, false) => None,
        };
        if let Some(mode) = mode {
            let top = self.page.height - self.y;
            let rect = Rect::new(
                Mm(self.x),
                Mm(top - height),
                Mm(self.x + width),
                Mm(top),
            )
            .with_mode(mode);
            self.layer.set_fill_color(pdf_color(self.fill_color));
            self.layer.set_outline_color(pdf_color(self.draw_color));
            self.layer.set_outline_thickness(LINE_WIDTH / PT_TO_MM);
            self.layer.add_rect(rect);
        }

        self.draw_text(text, height);
        self.x += width;
    }

    fn multi_cell(&mut self, height: f32, text: &str) {
        let width = self.page.width - self.page.margin - self.x;
        let max_width = width - 2.0 * CELL_MARGIN;
        let lines = {
            let metrics = &self.current().metrics;
            let size = self.size;
            wrap_text(text, max_width, |c| metrics.char_width(c, size))
        };

        for line in lines {
            self.break_if_needed(height);
            self.draw_text(&line, height);
            self.y += height;
        }
        self.x = self.page.margin;
    }

    fn ln(&mut self, height: f32) {
        self.x = self.page.margin;
        self.y += height;
    }

    fn usable_width(&self) -> f32 {
        self.page.usable_width()
    }
}

fn register(doc: &PdfDocumentReference, data: &FontData) -> Result<Face> {
    let font = doc
        .add_external_font(data.bytes.as_slice())
        .map_err(|e| MdpdfError::Font {
            path: data.path.clone(),
            reason: e.to_string(),
        })?;
    Ok(Face {
        font,
        metrics: data.metrics.clone(),
    })
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_color_scale() {
        match pdf_color(Rgb::new(255, 0, 51)) {
            Color::Rgb(rgb) => {
                assert!((rgb.r - 1.0).abs() < 1e-6);
                assert!(rgb.g.abs() < 1e-6);
                assert!((rgb.b - 0.2).abs() < 1e-6);
            }
            other => panic!("unexpected color {:?}", other),
        }
    }
}
