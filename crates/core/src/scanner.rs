//! Heading line detection.
//!
//! A heading is a line that starts with one or more `#` markers followed
//! immediately by a single space. Everything else is ignored.

/// Heading marker character.
pub const HEADING_MARKER: char = '#';

/// A heading line found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Number of leading marker characters.
    pub level: usize,
    /// Title text with any previous numbering stripped.
    pub raw_title: &'a str,
    /// The full line, unmodified.
    pub original_text: &'a str,
}

/// Classifies a single line, returning `None` for non-heading lines.
///
/// ```
/// use numtoc_core::scanner::scan_line;
///
/// let heading = scan_line("### 1.1. Overview").unwrap();
/// assert_eq!(heading.level, 3);
/// assert_eq!(heading.raw_title, "Overview");
///
/// assert!(scan_line("#hashtag").is_none());
/// assert!(scan_line("plain text").is_none());
/// ```
pub fn scan_line(line: &str) -> Option<HeadingLine<'_>> {
    let level = line
        .bytes()
        .take_while(|&b| b == HEADING_MARKER as u8)
        .count();
    if level == 0 {
        return None;
    }
    let after_markers = &line[level..];
    let title = after_markers.strip_prefix(' ')?;
    // Lines glued together by a foreign terminator are not headings
    if title.contains('\n') {
        return None;
    }

    Some(HeadingLine {
        level,
        raw_title: strip_numbering(title),
        original_text: line,
    })
}

/// Strips leading `digits "."` tokens left behind by an earlier run, then trims.
///
/// Only the front of the title is touched, so `"1.2. Release 2.0."` becomes
/// `"Release 2.0."`.
pub fn strip_numbering(title: &str) -> &str {
    let mut rest = title.trim_start();
    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || rest.as_bytes().get(digits) != Some(&b'.') {
            break;
        }
        rest = rest[digits + 1..].trim_start();
    }
    rest.trim()
}

/// Scans every line, yielding the 0-based line index with each heading.
pub fn scan_lines<'a, I>(lines: I) -> impl Iterator<Item = (usize, HeadingLine<'a>)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| scan_line(line).map(|heading| (index, heading)))
}

/// Splits `text` on `line_ending` and scans the resulting lines.
pub fn scan_document<'a>(
    text: &'a str,
    line_ending: &'a str,
) -> impl Iterator<Item = (usize, HeadingLine<'a>)> {
    scan_lines(text.split(line_ending))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_levels() {
        assert_eq!(scan_line("# A").map(|h| h.level), Some(1));
        assert_eq!(scan_line("###### F").map(|h| h.level), Some(6));
        assert_eq!(scan_line("######### Deep").map(|h| h.level), Some(9));
    }

    #[test]
    fn requires_separating_space() {
        assert!(scan_line("#A").is_none());
        assert!(scan_line("##").is_none());
        assert!(scan_line("").is_none());
        assert!(scan_line(" # indented").is_none());
        assert!(scan_line("#\tTab").is_none());
    }

    #[test]
    fn rejects_embedded_newline() {
        assert!(scan_line("# A\n## B").is_none());
    }

    #[test]
    fn empty_title_is_still_a_heading() {
        let heading = scan_line("# ").unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.raw_title, "");
    }

    #[test]
    fn strips_existing_numbering() {
        assert_eq!(scan_line("## 1.2. Setup").unwrap().raw_title, "Setup");
        assert_eq!(scan_line("### 1.0.1. Deep").unwrap().raw_title, "Deep");
        assert_eq!(scan_line("# 1. 2. Spaced").unwrap().raw_title, "Spaced");
        assert_eq!(scan_line("# 12.Tight").unwrap().raw_title, "Tight");
    }

    #[test]
    fn keeps_embedded_digit_dots() {
        assert_eq!(strip_numbering("1. Release 2.0. notes"), "Release 2.0. notes");
        assert_eq!(strip_numbering("v1. Intro"), "v1. Intro");
        assert_eq!(strip_numbering("3 Ways"), "3 Ways");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(scan_line("#   Title  ").unwrap().raw_title, "Title");
        assert_eq!(scan_line("# Title\r").unwrap().raw_title, "Title");
    }

    #[test]
    fn keeps_original_text() {
        let heading = scan_line("## 9. Old").unwrap();
        assert_eq!(heading.original_text, "## 9. Old");
    }

    #[test]
    fn scan_document_reports_line_indices() {
        let found: Vec<usize> = scan_document("intro\n# A\ntext\n## B\n", "\n")
            .map(|(index, _)| index)
            .collect();
        assert_eq!(found, vec![1, 3]);
    }
}
