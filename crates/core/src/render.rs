//! Heading lines, TOC list lines and the delimited TOC block.

use crate::outline::Outline;
use crate::scanner::HEADING_MARKER;
use crate::slug::anchor_slug;

/// Line that opens the generated block.
pub const TOC_OPEN: &str = "<!-- TOC -->";
/// Line that closes the generated block.
pub const TOC_CLOSE: &str = "<!-- /TOC -->";
/// Indentation per nesting level beyond the first.
pub const INDENT_UNIT: &str = "    ";

/// Strings derived from a numbered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    /// `<markers> <label> <title>`
    pub heading_line: String,
    /// Anchor including the leading `#`.
    pub slug: String,
    /// Indented list item linking to `slug`.
    pub toc_line: String,
}

/// Number of dot-separated components in a label.
pub fn label_depth(label: &str) -> usize {
    label.split('.').filter(|part| !part.is_empty()).count()
}

/// Heading line with one marker per label component.
pub fn heading_line(label: &str, title: &str) -> String {
    let markers = HEADING_MARKER.to_string().repeat(label_depth(label));
    format!("{markers} {label} {title}")
}

/// Indented `- [label title](#slug)` list item.
pub fn toc_line(label: &str, title: &str) -> String {
    let indent = INDENT_UNIT.repeat(label_depth(label).saturating_sub(1));
    let slug = anchor_slug(label, title);
    format!("{indent}- [{label} {title}]({slug})")
}

/// Computes all derived strings for one entry.
pub fn render_entry(label: &str, title: &str) -> RenderedEntry {
    RenderedEntry {
        heading_line: heading_line(label, title),
        slug: anchor_slug(label, title),
        toc_line: toc_line(label, title),
    }
}

/// Lines of the delimited TOC block, delimiters included.
pub fn toc_block_lines(outline: &Outline) -> Vec<String> {
    let mut lines = Vec::with_capacity(outline.len() + 2);
    lines.push(TOC_OPEN.to_string());
    lines.extend(outline.toc_lines());
    lines.push(TOC_CLOSE.to_string());
    lines
}

/// Delimited TOC block; every line, including the closing delimiter, ends in `eol`.
pub fn render_toc_block(outline: &Outline, eol: &str) -> String {
    let mut block = String::new();
    for line in toc_block_lines(outline) {
        block.push_str(&line);
        block.push_str(eol);
    }
    block
}
