use crate::types::{OutlineHeading, OutlineResult, SyncConfig, SyncResult};
use numtoc_core::{BlockAction, LineEnding, Outline, SyncDiagnostics, SyncOptions, TocError, TocSync};

/// Converts `SyncConfig` to core `SyncOptions`.
pub fn to_sync_options(config: Option<&SyncConfig>) -> napi::Result<SyncOptions> {
    let Some(config) = config else {
        return Ok(SyncOptions::new());
    };

    let line_ending = match config.line_ending.as_deref() {
        None => LineEnding::Auto,
        Some(name) => LineEnding::from_name(name).ok_or_else(|| {
            napi::Error::new(
                napi::Status::InvalidArg,
                format!("Invalid lineEnding '{name}': expected auto, lf or crlf"),
            )
        })?,
    };

    Ok(SyncOptions {
        line_ending,
        force_regenerate: config.force_regenerate.unwrap_or(false),
    })
}

/// Converts a core error into the message shown to the user.
pub fn to_napi_error(err: TocError) -> napi::Error {
    napi::Error::from_reason(err.user_message())
}

fn warnings(diagnostics: &SyncDiagnostics) -> Vec<String> {
    diagnostics.warnings.iter().map(ToString::to_string).collect()
}

/// Converts a `TocSync` to a `SyncResult`.
pub fn convert_sync(result: TocSync) -> SyncResult {
    let block = result.block.map(|action| match action {
        BlockAction::Replaced { .. } => "replaced".to_string(),
        BlockAction::Inserted => "inserted".to_string(),
    });
    SyncResult {
        changed: result.changed,
        warnings: warnings(&result.diagnostics),
        text: result.text,
        block,
    }
}

/// Converts an `Outline` to an `OutlineResult`.
pub fn convert_outline(outline: &Outline) -> OutlineResult {
    let headings = outline
        .entries()
        .iter()
        .map(|entry| {
            let rendered = entry.render();
            OutlineHeading {
                level: entry.level as u32,
                label: entry.label.clone(),
                title: entry.title.clone(),
                slug: rendered.slug,
                heading_line: rendered.heading_line,
                toc_line: rendered.toc_line,
                line: entry.line as u32,
            }
        })
        .collect();

    OutlineResult {
        headings,
        warnings: warnings(&outline.diagnostics),
    }
}
