//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options accepted by every synchronization entry point.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct SyncConfig {
    /// Line terminator policy: `auto` (default), `lf` or `crlf`.
    pub line_ending: Option<String>,
    /// Rebuild the TOC block even when every heading is already numbered.
    pub force_regenerate: Option<bool>,
}

/// Result of synchronizing one document.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Whether `text` differs from the input.
    pub changed: bool,
    /// The updated document text.
    pub text: String,
    /// `replaced`, `inserted`, or absent when the TOC block was not touched.
    pub block: Option<String>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

/// One numbered heading, listed in document order.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct OutlineHeading {
    /// Marker count (1-based nesting level).
    pub level: u32,
    /// Hierarchical number such as `1.0.2.`.
    pub label: String,
    /// Title without numbering.
    pub title: String,
    /// Anchor including the leading `#`.
    pub slug: String,
    /// Rewritten heading line.
    pub heading_line: String,
    /// Indented TOC list item.
    pub toc_line: String,
    /// 0-based line index in the document.
    pub line: u32,
}

/// Numbered outline plus any warnings raised while numbering.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct OutlineResult {
    /// Headings in document order.
    pub headings: Vec<OutlineHeading>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}
