//! Text wrapping and clipping.
//!
//! Wrapping works on measured widths rather than character counts: a line
//! breaks at the last space that keeps it inside `max_width`, or mid-word
//! when a single word is wider than the line. Whitespace is never collapsed,
//! so code keeps its indentation.

use std::borrow::Cow;

/// Wrap `text` to lines no wider than `max_width`.
///
/// `char_width` returns the width of one character in the same unit as
/// `max_width`. Always returns at least one line.
///
/// # Example
///
/// ```
/// use mdpdf_render::wrap_text;
///
/// let lines = wrap_text("aaa bbb ccc", 7.0, |_| 1.0);
/// assert_eq!(lines, vec!["aaa bbb", "ccc"]);
/// ```
pub fn wrap_text<F>(text: &str, max_width: f32, char_width: F) -> Vec<String>
where
    F: Fn(char) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0.0_f32;
    // Byte offset of the last space that follows non-space text
    let mut last_space: Option<usize> = None;
    let mut has_text = false;

    for c in text.chars() {
        let w = char_width(c);

        if width + w > max_width && !current.is_empty() {
            if c == ' ' {
                // The break swallows the space
                lines.push(std::mem::take(&mut current));
                width = 0.0;
                last_space = None;
                has_text = false;
                continue;
            }
            match last_space {
                Some(at) => {
                    let rest = current[at + 1..].to_string();
                    current.truncate(at);
                    lines.push(std::mem::replace(&mut current, rest));
                    width = current.chars().map(&char_width).sum();
                    has_text = current.chars().any(|ch| ch != ' ');
                }
                None => {
                    lines.push(std::mem::take(&mut current));
                    width = 0.0;
                    has_text = false;
                }
            }
            last_space = None;
        }

        if c == ' ' {
            if has_text {
                last_space = Some(current.len());
            }
        } else {
            has_text = true;
        }
        current.push(c);
        width += w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Keep only the first `max_chars` characters of `text`.
///
/// ```
/// use mdpdf_render::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo world", 5), "héllo");
/// assert_eq!(truncate_chars("short", 40), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Replace tabs with spaces up to the next multiple of `tab_width` columns.
///
/// PDF text has no tab stops, so a raw tab would be dropped or drawn as a
/// missing glyph.
///
/// ```
/// use mdpdf_render::expand_tabs;
///
/// assert_eq!(expand_tabs("\tx", 4), "    x");
/// assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
/// ```
pub fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(text.len() + tab_width);
    let mut column = 0;
    for c in text.chars() {
        if c == '\t' {
            let pad = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(_: char) -> f32 {
        1.0
    }

    #[test]
    fn test_no_wrap_needed() {
        assert_eq!(wrap_text("hello", 10.0, unit), vec!["hello"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_text("", 10.0, unit), vec![""]);
    }

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10.0, unit),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_long_word_breaks() {
        assert_eq!(wrap_text("abcdefghij", 4.0, unit), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_leading_whitespace_kept() {
        assert_eq!(wrap_text("    x = 1", 20.0, unit), vec!["    x = 1"]);
        assert_eq!(wrap_text("    abcdef", 6.0, unit), vec!["    ab", "cdef"]);
    }

    #[test]
    fn test_lines_fit() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod";
        for line in wrap_text(text, 17.0, unit) {
            assert!(line.chars().count() <= 17, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_variable_widths() {
        let width = |c: char| if c == 'W' { 3.0 } else { 1.0 };
        assert_eq!(wrap_text("WW ii", 6.0, width), vec!["WW", "ii"]);
    }

    #[test]
    fn test_expand_tabs_to_stops() {
        assert_eq!(expand_tabs("\t\tx", 4), "        x");
        assert_eq!(expand_tabs("abc\td\te", 4), "abc d   e");
        assert_eq!(expand_tabs("├──\tmain", 4), "├── main");
        assert!(matches!(expand_tabs("no tabs", 4), Cow::Borrowed("no tabs")));
        assert_eq!(expand_tabs("a\tb", 0), "a b");
    }

    #[test]
    fn test_truncate_exact() {
        let long = "x".repeat(41);
        assert_eq!(truncate_chars(&long, 40).chars().count(), 40);
        let exact = "y".repeat(40);
        assert_eq!(truncate_chars(&exact, 40), exact);
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
