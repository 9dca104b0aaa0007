//! mdpdf Render
//!
//! This crate provides the PDF rendering engine for mdpdf, converting
//! parse events into calls on a drawing [`Surface`].
//!
//! # Features
//!
//! - **Headings** - 3 bold tiers with their own spacing
//! - **Code blocks** - monospace, muted, whitespace preserved
//! - **Tables** - equal-width bordered cells with a filled header row
//! - **Lists and paragraphs** - wrapped to the usable page width
//! - **Pagination** - automatic page breaks in [`PdfSurface`]
//!
//! # Example
//!
//! ```
//! use mdpdf_render::{Recorder, Renderer};
//!
//! let mut renderer = Renderer::new(Recorder::default());
//! renderer.render_document("# Hello World\n\nSome text.");
//!
//! assert_eq!(renderer.surface().texts(), vec!["Hello World", "Some text."]);
//! ```

pub mod code;
pub mod fonts;
pub mod heading;
pub mod list;
pub mod pdf;
pub mod surface;
pub mod table;
pub mod text;

pub use code::{render_code_line, TAB_WIDTH};
pub use fonts::{FontData, FontMetrics, FontSet};
pub use heading::{render_block, render_heading};
pub use list::{render_list_item, BULLET};
pub use pdf::PdfSurface;
pub use surface::{Op, Recorder, Surface};
pub use table::{column_width, render_table};
pub use text::{expand_tabs, truncate_chars, wrap_text};

use log::{debug, info, trace};
use mdpdf_config::{ComputedStyle, Config};
use mdpdf_core::{BlockKind, Result};
use mdpdf_parser::{split_lines, ParseEvent, Parser};

/// Renders parse events onto a surface.
pub struct Renderer<S: Surface> {
    /// Drawing surface
    surface: S,
    /// Render style table
    style: ComputedStyle,
    /// Lines drawn inside code fences
    code_lines: usize,
    /// Tables drawn
    tables: usize,
}

impl<S: Surface> Renderer<S> {
    /// Create a renderer with the default style.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, ComputedStyle::default())
    }

    /// Create a renderer with a custom style.
    pub fn with_style(surface: S, style: ComputedStyle) -> Self {
        Self {
            surface,
            style,
            code_lines: 0,
            tables: 0,
        }
    }

    /// Get the style.
    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// Get the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the renderer, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Render a single parse event.
    pub fn render_event(&mut self, event: &ParseEvent) {
        trace!("Render event: {:?}", event);

        match event {
            ParseEvent::Heading { level, content } => {
                let kind = BlockKind::heading(*level).unwrap_or(BlockKind::Paragraph);
                render_heading(&mut self.surface, self.style.text(kind), content);
            }

            // Fence markers are never drawn
            ParseEvent::CodeBlockStart | ParseEvent::CodeBlockEnd => {}

            ParseEvent::CodeBlockLine(line) => {
                self.code_lines += 1;
                render_code_line(
                    &mut self.surface,
                    &self.style.code,
                    self.style.text_color,
                    line,
                );
            }

            ParseEvent::ListItem(content) => {
                render_list_item(
                    &mut self.surface,
                    &self.style.bullet_item,
                    &self.style.bullet,
                    content,
                );
            }

            ParseEvent::Paragraph(text) => {
                render_block(&mut self.surface, &self.style.paragraph, text);
            }

            ParseEvent::Table(table) => {
                self.tables += 1;
                render_table(
                    &mut self.surface,
                    &self.style.table,
                    self.style.text_color,
                    table,
                );
                if self.style.table.after > 0.0 {
                    self.surface.ln(self.style.table.after);
                }
            }

            ParseEvent::EmptyLine => {
                self.surface.ln(self.style.blank_spacing);
            }
        }
    }

    /// Parse and render a complete document.
    pub fn render_document(&mut self, text: &str) {
        let mut parser = Parser::new();
        for line in split_lines(text) {
            for event in parser.parse_line(line) {
                self.render_event(&event);
            }
        }
        // A table still open at end of input gets no spacing after it
        for event in parser.finish() {
            match &event {
                ParseEvent::Table(table) => {
                    self.tables += 1;
                    render_table(
                        &mut self.surface,
                        &self.style.table,
                        self.style.text_color,
                        table,
                    );
                }
                other => self.render_event(other),
            }
        }
        debug!(
            "Rendered {} code lines and {} tables",
            self.code_lines, self.tables
        );
    }
}

/// Render Markdown to PDF bytes using fonts, page, and style from `config`.
///
/// Nothing is written to disk; failures leave no partial output.
pub fn render_pdf(markdown: &str, title: &str, config: &Config) -> Result<Vec<u8>> {
    let style = config.computed_style()?;
    let fonts = FontSet::load(&config.fonts)?;
    let surface = PdfSurface::new(title, config.page, &fonts)?;

    let mut renderer = Renderer::with_style(surface, style);
    renderer.render_document(markdown);

    let surface = renderer.into_surface();
    info!("Rendered {} page(s)", surface.page_count());
    surface.finish()
}
