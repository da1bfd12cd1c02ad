//! Synchronization options.

/// Line terminator used to split the document and for every inserted line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// CRLF if the document contains any `\r\n`, otherwise LF.
    #[default]
    Auto,
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Resolve `Auto` against a document and return the terminator string.
    pub fn resolve(self, text: &str) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Auto => {
                if text.contains("\r\n") {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// Parse a host-supplied name (`auto`, `lf`, `crlf`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(LineEnding::Auto),
            "lf" => Some(LineEnding::Lf),
            "crlf" => Some(LineEnding::CrLf),
            _ => None,
        }
    }
}

/// Options controlling one synchronization run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Line terminator policy.
    pub line_ending: LineEnding,
    /// Rebuild the TOC block even when no heading line changed.
    pub force_regenerate: bool,
}

impl SyncOptions {
    /// Default behavior: the TOC block is only touched when a heading changed.
    pub const fn new() -> Self {
        Self {
            line_ending: LineEnding::Auto,
            force_regenerate: false,
        }
    }

    /// Always rebuild the TOC block.
    pub const fn forced() -> Self {
        Self {
            line_ending: LineEnding::Auto,
            force_regenerate: true,
        }
    }

    /// Replace the line ending policy.
    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_detects_crlf() {
        assert_eq!(LineEnding::Auto.resolve("a\r\nb"), "\r\n");
        assert_eq!(LineEnding::Auto.resolve("a\nb"), "\n");
        assert_eq!(LineEnding::Lf.resolve("a\r\nb"), "\n");
    }

    #[test]
    fn parses_names() {
        assert_eq!(LineEnding::from_name("CRLF"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::from_name("lf"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::from_name("cr"), None);
    }

    #[test]
    fn presets() {
        assert!(!SyncOptions::new().force_regenerate);
        assert!(SyncOptions::forced().force_regenerate);
        assert_eq!(
            SyncOptions::new().with_line_ending(LineEnding::CrLf).line_ending,
            LineEnding::CrLf
        );
    }
}
