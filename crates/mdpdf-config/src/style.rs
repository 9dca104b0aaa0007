//! Style configuration.
//!
//! This module contains the `StyleConfig` and `TableConfig` structs which
//! hold font sizes, spacing, and colors for every rendered block kind.

use serde::{Deserialize, Serialize};

/// Size and spacing for one block kind, in points (size) and millimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TextStyleConfig {
    /// Font size in points
    pub size: f32,
    /// Height of each wrapped line
    pub line_height: f32,
    /// Vertical space before the block
    #[serde(default)]
    pub before: f32,
    /// Vertical space after the block
    #[serde(default)]
    pub after: f32,
}

impl TextStyleConfig {
    /// Create a new text style.
    pub fn new(size: f32, line_height: f32, before: f32, after: f32) -> Self {
        Self {
            size,
            line_height,
            before,
            after,
        }
    }

    /// Level 1 heading defaults.
    pub fn h1() -> Self {
        Self::new(20.0, 10.0, 5.0, 3.0)
    }

    /// Level 2 heading defaults.
    pub fn h2() -> Self {
        Self::new(15.0, 8.0, 4.0, 2.0)
    }

    /// Level 3 heading defaults.
    pub fn h3() -> Self {
        Self::new(12.0, 7.0, 3.0, 2.0)
    }

    /// Paragraph and list item defaults.
    pub fn body() -> Self {
        Self::new(11.0, 6.0, 0.0, 0.0)
    }

    /// Code line defaults.
    pub fn code() -> Self {
        Self::new(9.0, 5.0, 0.0, 0.0)
    }
}

/// Style configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    #[serde(default = "TextStyleConfig::h1", rename = "H1")]
    pub h1: TextStyleConfig,

    #[serde(default = "TextStyleConfig::h2", rename = "H2")]
    pub h2: TextStyleConfig,

    #[serde(default = "TextStyleConfig::h3", rename = "H3")]
    pub h3: TextStyleConfig,

    /// Paragraphs and list items.
    #[serde(default = "TextStyleConfig::body")]
    pub body: TextStyleConfig,

    /// Lines inside code fences.
    #[serde(default = "TextStyleConfig::code")]
    pub code: TextStyleConfig,

    /// Vertical space emitted for a blank line.
    /// Default: 3
    #[serde(default = "default_blank_spacing")]
    pub blank_spacing: f32,

    /// Prefix drawn before list item text.
    /// Default: "  • "
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Default text color.
    /// Default: "#000000"
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Code text color.
    /// Default: "#3c3c3c"
    #[serde(default = "default_code_color")]
    pub code_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            h1: TextStyleConfig::h1(),
            h2: TextStyleConfig::h2(),
            h3: TextStyleConfig::h3(),
            body: TextStyleConfig::body(),
            code: TextStyleConfig::code(),
            blank_spacing: default_blank_spacing(),
            bullet: default_bullet(),
            text_color: default_text_color(),
            code_color: default_code_color(),
        }
    }
}

/// Table configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TableConfig {
    /// Cell font size in points. Default: 9
    #[serde(default = "default_table_font_size")]
    pub font_size: f32,

    /// Fixed cell height. Default: 7
    #[serde(default = "default_row_height")]
    pub row_height: f32,

    /// Characters kept per cell; the rest is clipped. Default: 40
    #[serde(default = "default_max_cell_chars")]
    pub max_cell_chars: usize,

    /// Vertical space after a table. Default: 3
    #[serde(default = "default_table_after")]
    pub after: f32,

    #[serde(default = "default_header_fill")]
    pub header_fill: String,

    #[serde(default = "default_header_text")]
    pub header_text: String,

    #[serde(default = "default_body_fill")]
    pub body_fill: String,

    #[serde(default = "default_text_color")]
    pub body_text: String,

    /// Cell border color.
    #[serde(default = "default_text_color")]
    pub border: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            font_size: default_table_font_size(),
            row_height: default_row_height(),
            max_cell_chars: default_max_cell_chars(),
            after: default_table_after(),
            header_fill: default_header_fill(),
            header_text: default_header_text(),
            body_fill: default_body_fill(),
            body_text: default_text_color(),
            border: default_text_color(),
        }
    }
}

fn default_blank_spacing() -> f32 {
    3.0
}

fn default_bullet() -> String {
    "  • ".to_string()
}

fn default_text_color() -> String {
    "#000000".to_string()
}

fn default_code_color() -> String {
    "#3c3c3c".to_string()
}

fn default_table_font_size() -> f32 {
    9.0
}

fn default_row_height() -> f32 {
    7.0
}

fn default_max_cell_chars() -> usize {
    40
}

fn default_table_after() -> f32 {
    3.0
}

fn default_header_fill() -> String {
    "#5050a0".to_string()
}

fn default_header_text() -> String {
    "#ffffff".to_string()
}

fn default_body_fill() -> String {
    "#f5f5f5".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();
        assert_eq!(style.h1, TextStyleConfig::new(20.0, 10.0, 5.0, 3.0));
        assert_eq!(style.h3.size, 12.0);
        assert_eq!(style.body.line_height, 6.0);
        assert_eq!(style.code.size, 9.0);
        assert_eq!(style.blank_spacing, 3.0);
        assert_eq!(style.bullet, "  • ");
    }

    #[test]
    fn test_heading_tiers_decrease() {
        let style = StyleConfig::default();
        assert!(style.h1.size > style.h2.size);
        assert!(style.h2.size > style.h3.size);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r##"
            H1 = { Size = 24.0, LineHeight = 12.0 }
            Body = { Size = 10.0, LineHeight = 5.5, After = 1.0 }
            Bullet = "- "
            CodeColor = "#101010"
        "##;

        let style: StyleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(style.h1.size, 24.0);
        assert_eq!(style.h1.before, 0.0);
        assert_eq!(style.body.after, 1.0);
        assert_eq!(style.h2, TextStyleConfig::h2());
        assert_eq!(style.bullet, "- ");
        assert_eq!(style.code_color, "#101010");
    }

    #[test]
    fn test_table_defaults() {
        let table = TableConfig::default();
        assert_eq!(table.max_cell_chars, 40);
        assert_eq!(table.row_height, 7.0);
        assert_eq!(table.header_fill, "#5050a0");
        assert_eq!(table.body_fill, "#f5f5f5");
    }
}
