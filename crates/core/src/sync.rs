//! Applies numbering to heading lines and refreshes the TOC block.
//!
//! The whole run is a pure function of the input text. The document is split
//! on its line terminator, edited as a list of lines, and joined back with the
//! same terminator so untouched lines round-trip byte for byte.

use crate::error::{SourceLocation, SyncDiagnostics, SyncWarning, TocError};
use crate::options::SyncOptions;
use crate::outline::{Outline, build_outline_with};
use crate::render::{self, TOC_CLOSE, TOC_OPEN};

/// What happened to the TOC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    /// An existing block spanning these 0-based lines (inclusive) was replaced.
    Replaced {
        /// Line of the opening delimiter.
        open: usize,
        /// Line of the closing delimiter.
        close: usize,
    },
    /// No block existed; a new one was put before the first line.
    Inserted,
}

/// Result of one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSync {
    /// Whether `text` differs from the input.
    pub changed: bool,
    /// The updated document.
    pub text: String,
    /// TOC block edit, if the block pass ran.
    pub block: Option<BlockAction>,
    /// Warnings gathered during the run.
    pub diagnostics: SyncDiagnostics,
}

impl TocSync {
    fn unchanged(text: &str, diagnostics: SyncDiagnostics) -> Self {
        Self {
            changed: false,
            text: text.to_string(),
            block: None,
            diagnostics,
        }
    }
}

/// Renumbers headings and refreshes the TOC with default options.
///
/// ```
/// use numtoc_core::synchronize_toc;
///
/// let result = synchronize_toc("# Intro\n## Setup\n").unwrap();
/// assert!(result.changed);
/// assert_eq!(
///     result.text,
///     "<!-- TOC -->\n- [1. Intro](#1-intro)\n    - [1.1. Setup](#11-setup)\n<!-- /TOC -->\n# 1. Intro\n## 1.1. Setup\n"
/// );
/// ```
pub fn synchronize_toc(text: &str) -> Result<TocSync, TocError> {
    synchronize_toc_with_options(text, SyncOptions::new())
}

/// Renumbers headings and refreshes the TOC.
pub fn synchronize_toc_with_options(text: &str, options: SyncOptions) -> Result<TocSync, TocError> {
    if text.is_empty() {
        return Ok(TocSync::unchanged(text, SyncDiagnostics::new()));
    }

    let eol = options.line_ending.resolve(text);
    let outline = build_outline_with(text, eol)?;
    let mut diagnostics = outline.diagnostics.clone();
    let mut lines: Vec<String> = text.split(eol).map(str::to_string).collect();

    let rewritten = rewrite_headings(&mut lines, &outline, &mut diagnostics)?;
    if rewritten == 0 && !options.force_regenerate {
        log::debug!("headings already numbered; TOC block left as is");
        return Ok(TocSync::unchanged(text, diagnostics));
    }

    let block = sync_block(&mut lines, &outline, &mut diagnostics);
    let new_text = lines.join(eol);
    let changed = rewritten > 0 || new_text != text;

    Ok(TocSync {
        changed,
        text: new_text,
        block: Some(block),
        diagnostics,
    })
}

/// Rewrites every heading line whose numbering is out of date.
///
/// The heading's own line is replaced when it still holds the original text.
/// Otherwise the first line containing that text gets a plain substring
/// replacement. Returns the number of rewritten headings.
pub fn rewrite_headings(
    lines: &mut [String],
    outline: &Outline,
    diagnostics: &mut SyncDiagnostics,
) -> Result<usize, TocError> {
    let mut rewritten = 0;

    for entry in outline.entries().iter().filter(|e| e.needs_rewrite()) {
        let replacement = render::heading_line(&entry.label, &entry.title);

        let anchored = lines
            .get(entry.line)
            .is_some_and(|line| *line == entry.original_text);

        if anchored {
            lines[entry.line] = replacement;
        } else {
            let (index, line) = lines
                .iter_mut()
                .enumerate()
                .find(|(_, line)| line.contains(entry.original_text.as_str()))
                .ok_or_else(|| {
                    TocError::write_failure(
                        format!("heading '{}' not found in document", entry.original_text),
                        entry.line,
                    )
                })?;
            *line = line.replacen(entry.original_text.as_str(), &replacement, 1);
            diagnostics.add_warning(SyncWarning::FallbackReplacement {
                location: SourceLocation::line_start(index),
            });
        }
        rewritten += 1;
    }

    log::debug!("rewrote {} heading lines", rewritten);
    Ok(rewritten)
}

/// Location of the existing TOC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSpan {
    /// Both delimiters found, opening first (0-based, inclusive).
    Found {
        /// Line of the opening delimiter.
        open: usize,
        /// Line of the closing delimiter.
        close: usize,
    },
    /// Neither delimiter found.
    Missing,
    /// Only one delimiter, or the closing one appears before any opening one.
    Unbalanced {
        /// Line of the stray delimiter.
        line: usize,
        /// Which delimiter it is.
        delimiter: &'static str,
    },
}

/// Finds the first opening delimiter and the first closing delimiter after it.
pub fn find_block<S: AsRef<str>>(lines: &[S]) -> BlockSpan {
    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    let mut non_blank = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    let open = non_blank
        .by_ref()
        .find(|(_, line)| line.contains(TOC_OPEN))
        .map(|(index, line)| (index, *line));

    match open {
        Some((open, line)) if closes_on_same_line(line) => BlockSpan::Found { open, close: open },
        Some((open, _)) => match non_blank.find(|(_, line)| line.contains(TOC_CLOSE)) {
            Some((close, _)) => BlockSpan::Found { open, close },
            None => BlockSpan::Unbalanced {
                line: open,
                delimiter: TOC_OPEN,
            },
        },
        None => lines
            .iter()
            .position(|line| line.contains(TOC_CLOSE))
            .map_or(BlockSpan::Missing, |line| BlockSpan::Unbalanced {
                line,
                delimiter: TOC_CLOSE,
            }),
    }
}

fn closes_on_same_line(line: &str) -> bool {
    line.find(TOC_OPEN)
        .is_some_and(|start| line[start + TOC_OPEN.len()..].contains(TOC_CLOSE))
}

fn sync_block(
    lines: &mut Vec<String>,
    outline: &Outline,
    diagnostics: &mut SyncDiagnostics,
) -> BlockAction {
    let block = render::toc_block_lines(outline);

    match find_block(lines.as_slice()) {
        BlockSpan::Found { open, close } => {
            log::debug!("replacing TOC block at lines {}..={}", open + 1, close + 1);
            lines.splice(open..=close, block);
            BlockAction::Replaced { open, close }
        }
        span => {
            if let BlockSpan::Unbalanced { line, delimiter } = span {
                diagnostics.add_warning(SyncWarning::UnbalancedDelimiter {
                    location: SourceLocation::line_start(line),
                    delimiter,
                });
            }
            log::debug!("no TOC block found; inserting at the top");
            lines.splice(0..0, block);
            BlockAction::Inserted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineEnding;
    use crate::outline::build_outline;

    #[test]
    fn inserts_block_when_missing() {
        let result = synchronize_toc("# A\ntext\n## B").unwrap();
        assert!(result.changed);
        assert_eq!(result.block, Some(BlockAction::Inserted));
        assert_eq!(
            result.text,
            "<!-- TOC -->\n- [1. A](#1-a)\n    - [1.1. B](#11-b)\n<!-- /TOC -->\n# 1. A\ntext\n## 1.1. B"
        );
    }

    #[test]
    fn replaces_existing_block_in_place() {
        let input = "Title text\n\n<!-- TOC -->\n- stale\n\n- more stale\n<!-- /TOC -->\n\n# A\n";
        let result = synchronize_toc(input).unwrap();
        assert_eq!(result.block, Some(BlockAction::Replaced { open: 2, close: 6 }));
        assert_eq!(
            result.text,
            "Title text\n\n<!-- TOC -->\n- [1. A](#1-a)\n<!-- /TOC -->\n\n# 1. A\n"
        );
    }

    #[test]
    fn second_run_is_a_no_op() {
        let first = synchronize_toc("# A\n### Deep\n## B\n# C\n").unwrap();
        let second = synchronize_toc(&first.text).unwrap();
        assert!(!second.changed);
        assert_eq!(second.text, first.text);
        assert_eq!(second.block, None);
    }

    #[test]
    fn stale_block_untouched_when_headings_match() {
        let input = "<!-- TOC -->\n- wrong\n<!-- /TOC -->\n# 1. A\n";
        let result = synchronize_toc(input).unwrap();
        assert!(!result.changed);
        assert_eq!(result.text, input);
    }

    #[test]
    fn forced_run_refreshes_stale_block() {
        let input = "<!-- TOC -->\n- wrong\n<!-- /TOC -->\n# 1. A\n";
        let result = synchronize_toc_with_options(input, SyncOptions::forced()).unwrap();
        assert!(result.changed);
        assert_eq!(result.text, "<!-- TOC -->\n- [1. A](#1-a)\n<!-- /TOC -->\n# 1. A\n");

        let again = synchronize_toc_with_options(&result.text, SyncOptions::forced()).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn empty_document_is_unchanged() {
        let result = synchronize_toc("").unwrap();
        assert!(!result.changed);
        assert_eq!(result.text, "");
    }

    #[test]
    fn document_without_headings_is_unchanged() {
        let result = synchronize_toc("plain\ntext\n").unwrap();
        assert!(!result.changed);
        assert_eq!(result.text, "plain\ntext\n");
    }

    #[test]
    fn crlf_documents_keep_crlf() {
        let result = synchronize_toc("# A\r\n## B\r\n").unwrap();
        assert_eq!(
            result.text,
            "<!-- TOC -->\r\n- [1. A](#1-a)\r\n    - [1.1. B](#11-b)\r\n<!-- /TOC -->\r\n# 1. A\r\n## 1.1. B\r\n"
        );
    }

    #[test]
    fn explicit_line_ending_is_used() {
        let options = SyncOptions::new().with_line_ending(LineEnding::Lf);
        let result = synchronize_toc_with_options("# A\n", options).unwrap();
        assert!(!result.text.contains('\r'));
    }

    #[test]
    fn unbalanced_open_delimiter_inserts_new_block() {
        let input = "<!-- TOC -->\n# A";
        let result = synchronize_toc(input).unwrap();
        assert_eq!(result.block, Some(BlockAction::Inserted));
        assert_eq!(
            result.text,
            "<!-- TOC -->\n- [1. A](#1-a)\n<!-- /TOC -->\n<!-- TOC -->\n# 1. A"
        );
        assert_eq!(
            result.diagnostics.warnings,
            vec![SyncWarning::UnbalancedDelimiter {
                location: SourceLocation::new(1, 1),
                delimiter: TOC_OPEN,
            }]
        );
    }

    #[test]
    fn single_line_block_is_replaced() {
        let result = synchronize_toc("<!-- TOC --><!-- /TOC -->\n# A").unwrap();
        assert_eq!(result.block, Some(BlockAction::Replaced { open: 0, close: 0 }));
        assert_eq!(result.text, "<!-- TOC -->\n- [1. A](#1-a)\n<!-- /TOC -->\n# 1. A");
        assert!(!result.diagnostics.has_warnings());
    }

    #[test]
    fn mixed_line_endings_do_not_leak_into_toc() {
        let input = "# A\n## B\r\n";
        let result = synchronize_toc(input).unwrap();
        assert!(!result.changed);
        assert_eq!(result.text, input);
    }

    #[test]
    fn find_block_cases() {
        assert_eq!(find_block(&["a", "b"]), BlockSpan::Missing);
        assert_eq!(
            find_block(&["x", "<!-- TOC -->", "", "- a", "<!-- /TOC -->"]),
            BlockSpan::Found { open: 1, close: 4 }
        );
        assert_eq!(
            find_block(&["<!-- /TOC -->", "text"]),
            BlockSpan::Unbalanced {
                line: 0,
                delimiter: TOC_CLOSE
            }
        );
        assert_eq!(
            find_block(&["<!-- /TOC -->", "<!-- TOC -->"]),
            BlockSpan::Unbalanced {
                line: 1,
                delimiter: TOC_OPEN
            }
        );
    }

    #[test]
    fn anchored_rewrite_targets_own_line() {
        let text = "# B\n# 1. B";
        let outline = build_outline(text).unwrap();
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let mut diagnostics = SyncDiagnostics::new();
        let count = rewrite_headings(&mut lines, &outline, &mut diagnostics).unwrap();
        assert_eq!(count, 2);
        assert_eq!(lines, vec!["# 1. B", "# 2. B"]);
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn falls_back_to_plain_replacement() {
        let outline = build_outline("# A").unwrap();
        let mut lines = vec!["prefix # A suffix".to_string()];
        let mut diagnostics = SyncDiagnostics::new();
        rewrite_headings(&mut lines, &outline, &mut diagnostics).unwrap();
        assert_eq!(lines, vec!["prefix # 1. A suffix"]);
        assert_eq!(
            diagnostics.warnings,
            vec![SyncWarning::FallbackReplacement {
                location: SourceLocation::new(1, 1)
            }]
        );
    }

    #[test]
    fn missing_heading_is_a_write_failure() {
        let outline = build_outline("# A").unwrap();
        let mut lines = vec!["unrelated".to_string()];
        let err = rewrite_headings(&mut lines, &outline, &mut SyncDiagnostics::new()).unwrap_err();
        assert!(matches!(err, TocError::HostWriteFailure { .. }));
    }

    #[test]
    fn orphan_heading_aborts_without_output() {
        assert!(matches!(
            synchronize_toc("## Orphan"),
            Err(TocError::OrphanHeading { .. })
        ));
    }
}
