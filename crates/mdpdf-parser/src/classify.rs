//! Line classification.
//!
//! [`classify`] looks at one line and nothing else. Precedence is fixed:
//! fence, code line, table separator, table row, heading levels 1-3,
//! bullet, paragraph, blank.

use regex::Regex;
use std::sync::LazyLock;

/// Code fence marker.
const FENCE: &str = "```";

/// Regex for table separator rows: only `-`, `:`, `|` and whitespace between pipes.
static TABLE_SEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("separator pattern is valid"));

/// Heading prefixes checked in order.
const HEADINGS: [(&str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// "```" marker; toggles code mode
    CodeFence,
    /// Verbatim line inside a fence
    CodeLine(&'a str),
    /// `|---|:--|` row; discarded
    TableSeparator,
    /// Table row split into trimmed cells
    TableRow(Vec<String>),
    /// Heading with level 1-3 and the text after the marker
    Heading { level: u8, content: &'a str },
    /// `- ` item text
    BulletItem(&'a str),
    /// Non-blank line matching nothing else
    Paragraph(&'a str),
    /// Empty or whitespace-only line
    BlankLine,
}

/// Classify a line given whether the scanner is inside a code fence.
///
/// # Example
///
/// ```
/// use mdpdf_parser::{classify, LineKind};
///
/// assert_eq!(classify("### Usage", false), LineKind::Heading { level: 3, content: "Usage" });
/// assert_eq!(classify("### Usage", true), LineKind::CodeLine("### Usage"));
/// ```
pub fn classify(line: &str, in_code_block: bool) -> LineKind<'_> {
    if line.starts_with(FENCE) {
        return LineKind::CodeFence;
    }
    if in_code_block {
        return LineKind::CodeLine(line);
    }
    if line.starts_with('|') {
        if TABLE_SEP_RE.is_match(line) {
            return LineKind::TableSeparator;
        }
        return LineKind::TableRow(split_table_row(line));
    }
    for (prefix, level) in HEADINGS {
        if let Some(content) = line.strip_prefix(prefix) {
            return LineKind::Heading { level, content };
        }
    }
    if let Some(text) = line.strip_prefix("- ") {
        return LineKind::BulletItem(text);
    }
    if line.trim().is_empty() {
        LineKind::BlankLine
    } else {
        LineKind::Paragraph(line)
    }
}

/// Split a table row on `|`, dropping the segments before the first and
/// after the last pipe, and trim each cell.
///
/// ```
/// use mdpdf_parser::split_table_row;
///
/// assert_eq!(split_table_row("| a | b |"), vec!["a", "b"]);
/// assert_eq!(split_table_row("| a | b"), vec!["a"]);
/// ```
pub fn split_table_row(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_beats_everything() {
        assert_eq!(classify("```", false), LineKind::CodeFence);
        assert_eq!(classify("```python", false), LineKind::CodeFence);
        assert_eq!(classify("```", true), LineKind::CodeFence);
    }

    #[test]
    fn test_indented_fence_is_not_a_fence() {
        assert_eq!(classify("  ```", false), LineKind::Paragraph("  ```"));
    }

    #[test]
    fn test_code_line_verbatim() {
        assert_eq!(classify("  x = 1  ", true), LineKind::CodeLine("  x = 1  "));
        assert_eq!(classify("", true), LineKind::CodeLine(""));
        assert_eq!(classify("| a |", true), LineKind::CodeLine("| a |"));
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# A", false), LineKind::Heading { level: 1, content: "A" });
        assert_eq!(classify("## B", false), LineKind::Heading { level: 2, content: "B" });
        assert_eq!(classify("### C", false), LineKind::Heading { level: 3, content: "C" });
    }

    #[test]
    fn test_deeper_heading_is_paragraph() {
        assert_eq!(classify("#### D", false), LineKind::Paragraph("#### D"));
        assert_eq!(classify("#nospace", false), LineKind::Paragraph("#nospace"));
    }

    #[test]
    fn test_heading_keeps_extra_spaces() {
        assert_eq!(classify("#  A", false), LineKind::Heading { level: 1, content: " A" });
        assert_eq!(classify("# ", false), LineKind::Heading { level: 1, content: "" });
    }

    #[test]
    fn test_separator_rows() {
        assert_eq!(classify("|---|---|", false), LineKind::TableSeparator);
        assert_eq!(classify("| :-- | --: |", false), LineKind::TableSeparator);
        assert_eq!(classify("|:-:|", false), LineKind::TableSeparator);
    }

    #[test]
    fn test_table_rows() {
        assert_eq!(
            classify("| Name | Value |", false),
            LineKind::TableRow(vec!["Name".into(), "Value".into()])
        );
        assert_eq!(classify("||", false), LineKind::TableRow(vec![String::new()]));
        assert_eq!(classify("|", false), LineKind::TableRow(Vec::new()));
    }

    #[test]
    fn test_bullet_and_paragraph() {
        assert_eq!(classify("- item", false), LineKind::BulletItem("item"));
        assert_eq!(classify("* item", false), LineKind::Paragraph("* item"));
        assert_eq!(classify("  - nested", false), LineKind::Paragraph("  - nested"));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify("", false), LineKind::BlankLine);
        assert_eq!(classify("   \t", false), LineKind::BlankLine);
    }

    #[test]
    fn test_split_table_row_trims() {
        assert_eq!(split_table_row("|  a  |b|   c |"), vec!["a", "b", "c"]);
        assert_eq!(split_table_row("| only"), Vec::<String>::new());
    }
}
