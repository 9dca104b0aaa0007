//! mdpdf Parser
//!
//! A single-pass line scanner that turns a Markdown document into block
//! events for the PDF renderer.
//!
//! # Overview
//!
//! Every line is first classified on its own by [`classify`], which returns
//! a [`LineKind`]. The [`Parser`] then applies the classification against its
//! [`ScanState`]: toggling code mode, buffering table rows, and flushing a
//! buffered table when the first non-table line arrives.
//!
//! # Example
//!
//! ```
//! use mdpdf_parser::{Parser, ParseEvent};
//!
//! let mut parser = Parser::new();
//!
//! for event in parser.parse_line("# Hello World") {
//!     match event {
//!         ParseEvent::Heading { level, content } => {
//!             println!("H{}: {}", level, content);
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod classify;

pub use classify::{classify, split_table_row, LineKind};

use log::trace;
use mdpdf_core::{ScanState, Table};

/// Events emitted by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    /// Heading of level 1-3
    Heading { level: u8, content: String },
    /// Opening fence; carries no content
    CodeBlockStart,
    /// One verbatim line inside a fence
    CodeBlockLine(String),
    /// Closing fence; carries no content
    CodeBlockEnd,
    /// `- ` item text, without the marker
    ListItem(String),
    /// Any other non-blank line, as written
    Paragraph(String),
    /// A complete buffered table
    Table(Table),
    /// Blank or whitespace-only line
    EmptyLine,
}

/// Line-by-line Markdown scanner.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    state: ScanState,
}

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scanner state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Whether the scanner is inside an open code fence.
    pub fn in_code_block(&self) -> bool {
        self.state.in_code_block
    }

    /// Whether table rows are being buffered.
    pub fn in_table(&self) -> bool {
        self.state.in_table
    }

    /// Process one line and return the events it completes.
    ///
    /// A line that ends a table yields the buffered [`ParseEvent::Table`]
    /// first, followed by the event for the line itself.
    pub fn parse_line(&mut self, line: &str) -> Vec<ParseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let kind = classify(line, self.state.in_code_block);
        trace!("line {}: {:?}", self.state.line_number, kind);
        self.state.line_number += 1;

        let mut events = Vec::new();

        match kind {
            LineKind::CodeFence => {
                if self.state.toggle_code_block() {
                    events.push(ParseEvent::CodeBlockStart);
                } else {
                    events.push(ParseEvent::CodeBlockEnd);
                }
                return events;
            }
            LineKind::CodeLine(text) => {
                events.push(ParseEvent::CodeBlockLine(text.to_string()));
                return events;
            }
            LineKind::TableSeparator => return events,
            LineKind::TableRow(cells) => {
                self.state.push_table_row(cells);
                return events;
            }
            _ => {}
        }

        if let Some(table) = self.state.flush_table() {
            trace!("table closed with {} rows", table.len());
            events.push(ParseEvent::Table(table));
        }

        events.push(match kind {
            LineKind::Heading { level, content } => ParseEvent::Heading {
                level,
                content: content.to_string(),
            },
            LineKind::BulletItem(text) => ParseEvent::ListItem(text.to_string()),
            LineKind::Paragraph(text) => ParseEvent::Paragraph(text.to_string()),
            _ => ParseEvent::EmptyLine,
        });

        events
    }

    /// Signal end of input, flushing a table that is still open.
    pub fn finish(&mut self) -> Vec<ParseEvent> {
        if self.state.in_code_block {
            trace!("input ended inside a code fence");
        }
        self.state
            .flush_table()
            .map(ParseEvent::Table)
            .into_iter()
            .collect()
    }

    /// Reset the parser for a new document.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Split a document into lines on `\n`.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so
/// the line count always equals the number of separators plus one.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Parse a complete document into events.
pub fn parse_document(text: &str) -> Vec<ParseEvent> {
    let mut parser = Parser::new();
    let mut events = Vec::new();
    for line in split_lines(text) {
        events.extend(parser.parse_line(line));
    }
    events.extend(parser.finish());
    events
}

/// Text of the first level-1 heading outside code fences.
pub fn first_heading(text: &str) -> Option<String> {
    let mut in_code_block = false;
    for line in split_lines(text) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify(line, in_code_block) {
            LineKind::CodeFence => in_code_block = !in_code_block,
            LineKind::Heading { level: 1, content } if !content.trim().is_empty() => {
                return Some(content.trim().to_string());
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_heading_events() {
        let events = parse_document("# One\n## Two\n### Three");
        assert_eq!(
            events,
            vec![
                ParseEvent::Heading { level: 1, content: "One".into() },
                ParseEvent::Heading { level: 2, content: "Two".into() },
                ParseEvent::Heading { level: 3, content: "Three".into() },
            ]
        );
    }

    #[test]
    fn test_code_fence_lines() {
        let events = parse_document("```rust\nfn main() {\n    body();\n}\n```");
        assert_eq!(
            events,
            vec![
                ParseEvent::CodeBlockStart,
                ParseEvent::CodeBlockLine("fn main() {".into()),
                ParseEvent::CodeBlockLine("    body();".into()),
                ParseEvent::CodeBlockLine("}".into()),
                ParseEvent::CodeBlockEnd,
            ]
        );
    }

    #[test]
    fn test_code_hides_markdown() {
        let events = parse_document("```\n# not a heading\n| a | b |\n```");
        assert_eq!(
            events,
            vec![
                ParseEvent::CodeBlockStart,
                ParseEvent::CodeBlockLine("# not a heading".into()),
                ParseEvent::CodeBlockLine("| a | b |".into()),
                ParseEvent::CodeBlockEnd,
            ]
        );
    }

    #[test]
    fn test_unterminated_fence() {
        let mut parser = Parser::new();
        let mut events = Vec::new();
        for line in ["```", "a", "- b"] {
            events.extend(parser.parse_line(line));
        }
        assert!(parser.in_code_block());
        assert!(parser.finish().is_empty());
        assert_eq!(
            events,
            vec![
                ParseEvent::CodeBlockStart,
                ParseEvent::CodeBlockLine("a".into()),
                ParseEvent::CodeBlockLine("- b".into()),
            ]
        );
    }

    #[test]
    fn test_table_flush_falls_through() {
        let events = parse_document("| A | B |\n|---|---|\n| 1 | 2 |\n## After");
        assert_eq!(
            events,
            vec![
                ParseEvent::Table(Table {
                    rows: vec![cells(&["A", "B"]), cells(&["1", "2"])],
                }),
                ParseEvent::Heading { level: 2, content: "After".into() },
            ]
        );
    }

    #[test]
    fn test_table_flushed_at_end_of_input() {
        let mut parser = Parser::new();
        assert!(parser.parse_line("| A |").is_empty());
        assert!(parser.parse_line("| 1 |").is_empty());
        assert!(parser.in_table());

        let events = parser.finish();
        assert_eq!(
            events,
            vec![ParseEvent::Table(Table {
                rows: vec![cells(&["A"]), cells(&["1"])],
            })]
        );
        assert!(!parser.in_table());
    }

    #[test]
    fn test_separator_only_is_not_a_table() {
        let events = parse_document("|---|---|\ntext");
        assert_eq!(events, vec![ParseEvent::Paragraph("text".into())]);
    }

    #[test]
    fn test_blank_line_between_paragraphs() {
        let events = parse_document("first\n\nsecond");
        assert_eq!(
            events,
            vec![
                ParseEvent::Paragraph("first".into()),
                ParseEvent::EmptyLine,
                ParseEvent::Paragraph("second".into()),
            ]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let events = parse_document("# Title\r\n| a |\r\n|---|\r\n");
        assert_eq!(
            events,
            vec![
                ParseEvent::Heading { level: 1, content: "Title".into() },
                ParseEvent::Table(Table { rows: vec![cells(&["a"])] }),
                ParseEvent::EmptyLine,
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_document(""), vec![ParseEvent::EmptyLine]);
    }

    #[test]
    fn test_bullets() {
        let events = parse_document("- one\n-two");
        assert_eq!(
            events,
            vec![
                ParseEvent::ListItem("one".into()),
                ParseEvent::Paragraph("-two".into()),
            ]
        );
    }

    #[test]
    fn test_first_heading() {
        assert_eq!(
            first_heading("intro\n```\n# code\n```\n## Sub\n# Real Title \n"),
            Some("Real Title".into())
        );
        assert_eq!(first_heading("## only sub"), None);
    }

    #[test]
    fn test_line_numbers_advance() {
        let mut parser = Parser::new();
        parser.parse_line("a");
        parser.parse_line("```");
        parser.parse_line("| x |");
        assert_eq!(parser.state().line_number, 3);
        parser.reset();
        assert_eq!(parser.state().line_number, 0);
    }
}
