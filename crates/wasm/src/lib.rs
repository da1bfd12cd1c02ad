use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use numtoc_core::{BlockAction, LineEnding, SyncDiagnostics, SyncOptions};

// ============================================================================
// Sync Config
// ============================================================================

/// Configuration accepted by the WASM entry points.
/// Mirrors the NAPI `SyncConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmSyncConfig {
    #[serde(default, alias = "lineEnding")]
    pub line_ending: Option<String>,
    #[serde(default, alias = "forceRegenerate")]
    pub force_regenerate: Option<bool>,
}

impl WasmSyncConfig {
    fn to_options(&self) -> Result<SyncOptions, JsError> {
        let line_ending = match self.line_ending.as_deref() {
            None => LineEnding::Auto,
            Some(name) => LineEnding::from_name(name).ok_or_else(|| {
                JsError::new(&format!(
                    "Invalid lineEnding '{}': expected auto, lf or crlf",
                    name
                ))
            })?,
        };
        Ok(SyncOptions {
            line_ending,
            force_regenerate: self.force_regenerate.unwrap_or(false),
        })
    }
}

fn parse_config(config: JsValue) -> Result<SyncOptions, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(SyncOptions::new());
    }
    let cfg: WasmSyncConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    cfg.to_options()
}

fn warnings(diagnostics: &SyncDiagnostics) -> Vec<String> {
    diagnostics.warnings.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Sync API
// ============================================================================

/// Result of synchronizing one document.
#[derive(Debug, Clone, Serialize)]
pub struct SyncResult {
    /// Whether `text` differs from the input.
    pub changed: bool,
    /// The updated document text.
    pub text: String,
    /// `replaced`, `inserted`, or `null` when the TOC block was not touched.
    pub block: Option<&'static str>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

/// Renumbers the headings of a document and refreshes its TOC block.
///
/// # Arguments
///
/// * `source` - The full document text
/// * `config` - Optional `{ lineEnding, forceRegenerate }` object
///
/// # Returns
///
/// Returns `{ changed, text, block, warnings }`. When `changed` is false the
/// host should leave its buffer alone.
#[wasm_bindgen]
pub fn synchronize_toc(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config)?;
    let result = numtoc_core::synchronize_toc_with_options(source, options)
        .map_err(|e| JsError::new(&e.user_message()))?;

    let block = result.block.map(|action| match action {
        BlockAction::Replaced { .. } => "replaced",
        BlockAction::Inserted => "inserted",
    });
    let response = SyncResult {
        changed: result.changed,
        warnings: warnings(&result.diagnostics),
        text: result.text,
        block,
    };

    serde_wasm_bindgen::to_value(&response)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Outline API
// ============================================================================

/// Heading metadata extracted from the document.
#[derive(Debug, Clone, Serialize)]
pub struct HeadingEntry {
    /// Marker count.
    pub level: usize,
    /// Hierarchical number such as `1.0.2.`.
    pub label: String,
    /// Title without numbering.
    pub title: String,
    /// Anchor including the leading `#`.
    pub slug: String,
    /// 0-based line index.
    pub line: usize,
}

/// Result of numbering a document without editing it.
#[derive(Debug, Clone, Serialize)]
pub struct OutlineResult {
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Rendered TOC list lines in depth-first order.
    pub toc_lines: Vec<String>,
    /// Human-readable warnings.
    pub warnings: Vec<String>,
}

/// Numbers the headings of a document and returns them with the TOC lines.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { outline } from './numtoc_wasm';
///
/// const { headings } = outline('# Intro\n### Deep');
/// // headings[1] = { level: 3, label: "1.0.1.", title: "Deep", slug: "#101-deep", line: 1 }
/// ```
#[wasm_bindgen]
pub fn outline(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config)?;
    let eol = options.line_ending.resolve(source);
    let outline = numtoc_core::build_outline_with(source, eol)
        .map_err(|e| JsError::new(&e.user_message()))?;

    let headings = outline
        .entries()
        .iter()
        .map(|entry| HeadingEntry {
            level: entry.level,
            label: entry.label.clone(),
            title: entry.title.clone(),
            slug: entry.render().slug,
            line: entry.line,
        })
        .collect();

    let result = OutlineResult {
        headings,
        toc_lines: outline.toc_lines(),
        warnings: warnings(&outline.diagnostics),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
