//! Font loading and glyph metrics.
//!
//! TrueType files are read once at startup. Their horizontal advances are
//! extracted with `ttf-parser` so text can be measured for wrapping before
//! it is handed to the PDF writer.

use log::debug;
use mdpdf_config::FontsConfig;
use mdpdf_core::{MdpdfError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Points to millimetres.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Advance of builtin Courier glyphs, in em.
pub const COURIER_ADVANCE: f32 = 0.6;

/// Non-ASCII characters WinAnsiEncoding maps into 0x80-0x9F.
const WIN_ANSI_EXTRA: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Whether builtin PDF fonts can encode `c`.
///
/// Anything else is dropped by the WinAnsi text encoder.
pub fn win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WIN_ANSI_EXTRA.contains(c)
}

/// Horizontal glyph metrics for one face.
#[derive(Debug, Clone, PartialEq)]
pub enum FontMetrics {
    /// Per-character advances read from a TrueType file
    Glyphs {
        units_per_em: u16,
        advances: HashMap<char, u16>,
        /// Advance used for characters the font lacks
        fallback: u16,
    },
    /// Fixed advance in em per display column, for builtin WinAnsi faces
    Fixed { advance: f32 },
}

impl FontMetrics {
    /// Read advances for every mapped codepoint.
    pub fn from_ttf(data: &[u8]) -> std::result::Result<Self, String> {
        let face = ttf_parser::Face::parse(data, 0).map_err(|e| e.to_string())?;
        let units_per_em = face.units_per_em();

        let mut advances = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    let Some(c) = char::from_u32(cp) else {
                        return;
                    };
                    if let Some(advance) = face
                        .glyph_index(c)
                        .and_then(|id| face.glyph_hor_advance(id))
                    {
                        advances.insert(c, advance);
                    }
                });
            }
        }

        if advances.is_empty() {
            return Err("font has no unicode character map".to_string());
        }

        let fallback = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .unwrap_or(units_per_em / 2);

        Ok(FontMetrics::Glyphs {
            units_per_em,
            advances,
            fallback,
        })
    }

    /// Metrics for builtin Courier.
    pub fn courier() -> Self {
        FontMetrics::Fixed {
            advance: COURIER_ADVANCE,
        }
    }

    /// Advance of one character in em.
    pub fn char_em(&self, c: char) -> f32 {
        match self {
            FontMetrics::Glyphs {
                units_per_em,
                advances,
                fallback,
            } => {
                let units = advances.get(&c).copied().unwrap_or(*fallback);
                f32::from(units) / f32::from(*units_per_em)
            }
            FontMetrics::Fixed { advance } if win_ansi(c) => {
                c.width().unwrap_or(0) as f32 * advance
            }
            // Dropped when encoded, so it takes no room
            FontMetrics::Fixed { .. } => 0.0,
        }
    }

    /// Whether the face can draw `c`.
    pub fn covers(&self, c: char) -> bool {
        match self {
            FontMetrics::Glyphs { advances, .. } => advances.contains_key(&c),
            FontMetrics::Fixed { .. } => win_ansi(c),
        }
    }

    /// Distinct characters of `text` the face cannot draw, in order of appearance.
    pub fn missing_chars(&self, text: &str) -> Vec<char> {
        let mut missing = Vec::new();
        for c in text.chars() {
            if !self.covers(c) && !missing.contains(&c) {
                missing.push(c);
            }
        }
        missing
    }

    /// Width of one character in millimetres at `size` points.
    pub fn char_width(&self, c: char, size: f32) -> f32 {
        self.char_em(c) * size * PT_TO_MM
    }

    /// Width of a string in millimetres at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c, size)).sum()
    }
}

/// A font file loaded into memory.
#[derive(Debug, Clone)]
pub struct FontData {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub metrics: FontMetrics,
}

impl FontData {
    /// Read and parse a TrueType file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| MdpdfError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let metrics = FontMetrics::from_ttf(&bytes).map_err(|reason| MdpdfError::Font {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
            metrics,
        })
    }
}

/// The faces a document registers.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub family: String,
    pub regular: FontData,
    pub bold: FontData,
    /// Monospace face; builtin Courier when none is configured
    pub mono: Option<FontData>,
}

impl FontSet {
    /// Load every configured font, failing on the first missing file.
    pub fn load(config: &FontsConfig) -> Result<Self> {
        let regular = FontData::load(&config.regular)?;
        let bold = FontData::load(&config.bold)?;
        let mono = config.mono_path().map(FontData::load).transpose()?;

        Ok(Self {
            family: config.family.clone(),
            regular,
            bold,
            mono,
        })
    }
}
