//! Core enums for mdpdf.
//!
//! These enums name the block kinds that receive a render style and the
//! font faces a document registers.

use serde::{Deserialize, Serialize};

/// A rendered block category.
///
/// Each kind maps to exactly one entry in the render style table. Fences,
/// table separators, and blank lines produce no text and have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// `# ` heading
    Heading1,
    /// `## ` heading
    Heading2,
    /// `### ` heading
    Heading3,
    /// `- ` list item
    BulletItem,
    /// Any other non-blank line
    Paragraph,
    /// Line inside a code fence
    CodeLine,
}

impl BlockKind {
    /// Block kind for a heading level, if the level is supported.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(BlockKind::Heading1),
            2 => Some(BlockKind::Heading2),
            3 => Some(BlockKind::Heading3),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Heading1 => write!(f, "heading1"),
            BlockKind::Heading2 => write!(f, "heading2"),
            BlockKind::Heading3 => write!(f, "heading3"),
            BlockKind::BulletItem => write!(f, "bullet"),
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::CodeLine => write!(f, "code"),
        }
    }
}

/// Font faces registered with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    /// Regular weight of the text family
    Regular,
    /// Bold weight of the text family
    Bold,
    /// Fixed-width face for code
    Mono,
}

impl std::fmt::Display for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontFace::Regular => write!(f, "regular"),
            FontFace::Bold => write!(f, "bold"),
            FontFace::Mono => write!(f, "mono"),
        }
    }
}
