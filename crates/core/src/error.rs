use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the first column of a 0-based line index.
    pub fn line_start(index: usize) -> Self {
        Self::new(index + 1, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that abort a synchronization run.
#[derive(Debug, Error)]
pub enum TocError {
    /// A nested heading appeared before any top-level heading.
    #[error("Orphan heading at {location}: level {level} heading has no enclosing level 1 heading")]
    OrphanHeading {
        /// Marker count of the offending heading
        level: usize,
        /// Source location
        location: SourceLocation,
    },
    /// Neither the anchored nor the plain replacement found the heading text.
    #[error("Write failure at {location}: {message}")]
    HostWriteFailure {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Internal logic error (unexpected state).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl TocError {
    /// Create an orphan heading error for a 0-based line index
    pub fn orphan_heading(level: usize, line_index: usize) -> Self {
        Self::OrphanHeading {
            level,
            location: SourceLocation::line_start(line_index),
        }
    }

    /// Create a write failure for a 0-based line index
    pub fn write_failure(message: impl Into<String>, line_index: usize) -> Self {
        Self::HostWriteFailure {
            message: message.into(),
            location: SourceLocation::line_start(line_index),
        }
    }

    /// Message suitable for showing to the person who triggered the run.
    pub fn user_message(&self) -> String {
        format!("Failed to generate the new TOC.\n{self}")
    }
}

/// Non-fatal warnings that don't prevent synchronization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// Heading level jumped by more than one; skipped levels are numbered `0`.
    SkippedLevels {
        /// Source location of the deeper heading
        location: SourceLocation,
        /// Depth of the open ancestor chain
        from: usize,
        /// Level of the heading that jumped
        to: usize,
    },
    /// Only one TOC delimiter was found, or they appear out of order.
    UnbalancedDelimiter {
        /// Source location of the stray delimiter
        location: SourceLocation,
        /// The delimiter text
        delimiter: &'static str,
    },
    /// The heading's own line no longer matched; a plain substring replacement was used.
    FallbackReplacement {
        /// Source location of the replaced text
        location: SourceLocation,
    },
}

impl SyncWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            SyncWarning::SkippedLevels { location, .. } => location,
            SyncWarning::UnbalancedDelimiter { location, .. } => location,
            SyncWarning::FallbackReplacement { location } => location,
        }
    }
}

impl std::fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncWarning::SkippedLevels { location, from, to } => {
                write!(
                    f,
                    "{}: heading jumps from level {} to level {}",
                    location, from, to
                )
            }
            SyncWarning::UnbalancedDelimiter {
                location,
                delimiter,
            } => {
                write!(f, "{}: unbalanced TOC delimiter '{}'", location, delimiter)
            }
            SyncWarning::FallbackReplacement { location } => {
                write!(f, "{}: heading replaced by plain text match", location)
            }
        }
    }
}

/// Collection of warnings gathered during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<SyncWarning>,
}

impl SyncDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to the logger
    pub fn add_warning(&mut self, warning: SyncWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Move every warning from `other` into this collection
    pub fn extend(&mut self, other: SyncDiagnostics) {
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
