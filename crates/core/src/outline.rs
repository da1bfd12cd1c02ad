//! Numbered heading tree.
//!
//! Headings are consumed in document order. The builder keeps one frame per
//! open nesting level; levels that were jumped over get a placeholder frame
//! labelled `0` so their descendants still carry a full-length label.

use crate::error::{SourceLocation, SyncDiagnostics, SyncWarning, TocError};
use crate::render::{self, RenderedEntry};
use crate::scanner::{self, HeadingLine};

/// Index of an entry inside its [`Outline`].
pub type EntryId = usize;

/// One numbered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Marker count of the source heading.
    pub level: usize,
    /// Dot-terminated hierarchical number, e.g. `1.0.2.`.
    pub label: String,
    /// Title without numbering.
    pub title: String,
    /// The heading line as it appeared in the document.
    pub original_text: String,
    /// 0-based line index in the document.
    pub line: usize,
    children: Vec<EntryId>,
}

impl OutlineEntry {
    /// Child entries in document order.
    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    /// Derived heading line, anchor and TOC line.
    pub fn render(&self) -> RenderedEntry {
        render::render_entry(&self.label, &self.title)
    }

    /// Whether the document line must be rewritten.
    pub fn needs_rewrite(&self) -> bool {
        render::heading_line(&self.label, &self.title) != self.original_text
    }
}

/// Forest of numbered headings stored in a flat arena.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
    roots: Vec<EntryId>,
    /// Warnings raised while numbering.
    pub diagnostics: SyncDiagnostics,
}

impl Outline {
    /// Top-level entries in document order.
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&OutlineEntry> {
        self.entries.get(id)
    }

    /// Every entry in document order.
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the document has no headings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walks the forest depth-first, parents before their descendants.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            outline: self,
            pending: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Rendered TOC list lines in depth-first order.
    pub fn toc_lines(&self) -> Vec<String> {
        self.depth_first()
            .map(|entry| render::toc_line(&entry.label, &entry.title))
            .collect()
    }
}

/// Pre-order iterator over an [`Outline`].
pub struct DepthFirst<'a> {
    outline: &'a Outline,
    pending: Vec<EntryId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a OutlineEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop()?;
        let entry = &self.outline.entries[id];
        self.pending.extend(entry.children.iter().rev().copied());
        Some(entry)
    }
}

/// An open nesting level. `entry` is `None` for a skipped level, whose
/// children are counted by `next_child`.
#[derive(Debug)]
struct Frame {
    entry: Option<EntryId>,
    label: String,
    next_child: usize,
}

/// Incrementally numbers headings fed in document order.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    outline: Outline,
    stack: Vec<Frame>,
}

impl OutlineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers the heading found at 0-based `line` and attaches it to the tree.
    pub fn push(&mut self, line: usize, heading: HeadingLine<'_>) -> Result<EntryId, TocError> {
        let level = heading.level;

        if level == 1 {
            self.stack.clear();
            let label = format!("{}.", self.outline.roots.len() + 1);
            let id = self.insert(None, level, label.clone(), line, heading);
            self.outline.roots.push(id);
            self.stack.push(Frame {
                entry: Some(id),
                label,
                next_child: 0,
            });
            return Ok(id);
        }

        if self.stack.is_empty() {
            return Err(TocError::orphan_heading(level, line));
        }

        if level > self.stack.len() {
            if level - 1 > self.stack.len() {
                self.outline.diagnostics.add_warning(SyncWarning::SkippedLevels {
                    location: SourceLocation::line_start(line),
                    from: self.stack.len(),
                    to: level,
                });
            }
            while self.stack.len() < level - 1 {
                let label = format!("{}0.", self.top_label());
                self.stack.push(Frame {
                    entry: None,
                    label,
                    next_child: 0,
                });
            }
        } else {
            self.stack.truncate(level - 1);
        }

        let parent = self
            .stack
            .iter()
            .rev()
            .find_map(|frame| frame.entry)
            .ok_or_else(|| TocError::InternalError("open levels without a root".into()))?;
        let top = self
            .stack
            .last_mut()
            .ok_or_else(|| TocError::InternalError("empty level stack".into()))?;
        let ordinal = match top.entry {
            Some(id) => self.outline.entries[id].children.len() + 1,
            None => {
                top.next_child += 1;
                top.next_child
            }
        };
        let label = format!("{}{}.", top.label, ordinal);

        let id = self.insert(Some(parent), level, label.clone(), line, heading);
        log::debug!("line {}: level {} numbered {}", line + 1, level, label);
        self.stack.push(Frame {
            entry: Some(id),
            label,
            next_child: 0,
        });
        Ok(id)
    }

    /// Finishes numbering and returns the tree.
    pub fn finish(self) -> Outline {
        self.outline
    }

    fn top_label(&self) -> &str {
        self.stack.last().map_or("", |frame| frame.label.as_str())
    }

    fn insert(
        &mut self,
        parent: Option<EntryId>,
        level: usize,
        label: String,
        line: usize,
        heading: HeadingLine<'_>,
    ) -> EntryId {
        let id = self.outline.entries.len();
        self.outline.entries.push(OutlineEntry {
            level,
            label,
            title: heading.raw_title.to_string(),
            original_text: heading.original_text.to_string(),
            line,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.outline.entries[parent].children.push(id);
        }
        id
    }
}

/// Numbers every heading found in `lines`.
pub fn build_outline_lines<'a, I>(lines: I) -> Result<Outline, TocError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = OutlineBuilder::new();
    for (line, heading) in scanner::scan_lines(lines) {
        builder.push(line, heading)?;
    }
    let outline = builder.finish();
    log::debug!("numbered {} headings", outline.len());
    Ok(outline)
}

/// Scans `text` split on `line_ending` and numbers every heading.
pub fn build_outline_with(text: &str, line_ending: &str) -> Result<Outline, TocError> {
    build_outline_lines(text.split(line_ending))
}

/// Numbers every heading in `text`, detecting the line ending.
pub fn build_outline(text: &str) -> Result<Outline, TocError> {
    let eol = crate::options::LineEnding::Auto.resolve(text);
    build_outline_with(text, eol)
}
