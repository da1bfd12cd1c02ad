#![deny(missing_docs)]
//! numtoc core: heading numbering, outline building, and TOC synchronization.

/// Core error and diagnostic types.
pub mod error;
/// Synchronization options.
pub mod options;
/// Numbered heading tree.
pub mod outline;
/// Heading line, TOC line and TOC block rendering.
pub mod render;
/// Heading line detection.
pub mod scanner;
/// Anchor slug generation.
pub mod slug;
/// TOC block synchronization.
pub mod sync;

pub use error::{SourceLocation, SyncDiagnostics, SyncWarning, TocError};
pub use options::{LineEnding, SyncOptions};
pub use outline::{
    EntryId, Outline, OutlineBuilder, OutlineEntry, build_outline, build_outline_with,
};
pub use render::{
    RenderedEntry, TOC_CLOSE, TOC_OPEN, heading_line, render_entry, render_toc_block, toc_line,
};
pub use scanner::{HeadingLine, scan_document, scan_line, strip_numbering};
pub use slug::anchor_slug;
pub use sync::{BlockAction, TocSync, synchronize_toc, synchronize_toc_with_options};
