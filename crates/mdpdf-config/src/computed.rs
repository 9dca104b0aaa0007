//! Computed style values.
//!
//! This module contains `ComputedStyle`, the render style table with every
//! color parsed and every block kind bound to a font face.

use crate::style::{StyleConfig, TableConfig, TextStyleConfig};
use mdpdf_core::{BlockKind, FontFace, MdpdfError, Result, Rgb};

/// Resolved style for one block kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    /// Font size in points
    pub size: f32,
    pub line_height: f32,
    pub before: f32,
    pub after: f32,
    pub color: Rgb,
}

impl TextStyle {
    fn from_config(face: FontFace, config: &TextStyleConfig, color: Rgb) -> Self {
        Self {
            face,
            size: config.size,
            line_height: config.line_height,
            before: config.before,
            after: config.after,
            color,
        }
    }
}

/// Resolved table styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Header cells: bold, inverted text color
    pub header: TextStyle,
    /// Body cells
    pub body: TextStyle,
    pub header_fill: Rgb,
    pub body_fill: Rgb,
    pub border: Rgb,
    pub row_height: f32,
    pub max_cell_chars: usize,
    pub after: f32,
}

/// The render style table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub bullet_item: TextStyle,
    pub paragraph: TextStyle,
    pub code: TextStyle,
    pub table: TableStyle,
    /// Prefix drawn before list item text
    pub bullet: String,
    /// Vertical space for a blank line
    pub blank_spacing: f32,
    /// Color restored after code and tables
    pub text_color: Rgb,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default(), &TableConfig::default())
            .expect("Default style colors should be valid")
    }
}

impl ComputedStyle {
    /// Build the style table, failing on malformed colors.
    pub fn from_config(style: &StyleConfig, table: &TableConfig) -> Result<Self> {
        let text_color = parse_color("TextColor", &style.text_color)?;
        let code_color = parse_color("CodeColor", &style.code_color)?;

        let cell = TextStyleConfig::new(table.font_size, table.row_height, 0.0, 0.0);

        Ok(Self {
            h1: TextStyle::from_config(FontFace::Bold, &style.h1, text_color),
            h2: TextStyle::from_config(FontFace::Bold, &style.h2, text_color),
            h3: TextStyle::from_config(FontFace::Bold, &style.h3, text_color),
            bullet_item: TextStyle::from_config(FontFace::Regular, &style.body, text_color),
            paragraph: TextStyle::from_config(FontFace::Regular, &style.body, text_color),
            code: TextStyle::from_config(FontFace::Mono, &style.code, code_color),
            table: TableStyle {
                header: TextStyle::from_config(
                    FontFace::Bold,
                    &cell,
                    parse_color("HeaderText", &table.header_text)?,
                ),
                body: TextStyle::from_config(
                    FontFace::Regular,
                    &cell,
                    parse_color("BodyText", &table.body_text)?,
                ),
                header_fill: parse_color("HeaderFill", &table.header_fill)?,
                body_fill: parse_color("BodyFill", &table.body_fill)?,
                border: parse_color("Border", &table.border)?,
                row_height: table.row_height,
                max_cell_chars: table.max_cell_chars,
                after: table.after,
            },
            bullet: style.bullet.clone(),
            blank_spacing: style.blank_spacing,
            text_color,
        })
    }

    /// Style for a block kind.
    pub fn text(&self, kind: BlockKind) -> &TextStyle {
        match kind {
            BlockKind::Heading1 => &self.h1,
            BlockKind::Heading2 => &self.h2,
            BlockKind::Heading3 => &self.h3,
            BlockKind::BulletItem => &self.bullet_item,
            BlockKind::Paragraph => &self.paragraph,
            BlockKind::CodeLine => &self.code,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Rgb> {
    Rgb::from_hex(value)
        .ok_or_else(|| MdpdfError::Config(format!("{} is not a #rrggbb color: {:?}", key, value)))
}
