#![deny(missing_docs)]
//! Node.js bindings that surface numtoc's Rust implementation.

use napi_derive::napi;

/// Batch processing types.
pub mod batch;
/// Conversions between core and NAPI types.
mod convert;
/// NAPI-exposed data structures.
pub mod types;
pub use batch::*;
pub use types::*;

use convert::{convert_outline, convert_sync, to_napi_error, to_sync_options};

/// Renumbers the headings of a document and refreshes its TOC block.
///
/// Returns the updated text with `changed: false` when every heading already
/// carries the right number. Fails with a user-facing message when the
/// document cannot be numbered (for example a `##` heading before any `#`).
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { synchronizeToc } = require('numtoc-napi');
///
/// const { changed, text } = synchronizeToc('# Intro\n## Setup\n');
/// if (changed) editor.setText(text);
/// ```
#[napi(js_name = "synchronizeToc")]
pub fn synchronize_toc(source: String, config: Option<SyncConfig>) -> napi::Result<SyncResult> {
    let options = to_sync_options(config.as_ref())?;
    numtoc_core::synchronize_toc_with_options(&source, options)
        .map(convert_sync)
        .map_err(to_napi_error)
}

/// Numbers the headings of a document without editing it.
#[napi(js_name = "buildOutline")]
pub fn build_outline(source: String, config: Option<SyncConfig>) -> napi::Result<OutlineResult> {
    let options = to_sync_options(config.as_ref())?;
    let eol = options.line_ending.resolve(&source);
    numtoc_core::build_outline_with(&source, eol)
        .map(|outline| convert_outline(&outline))
        .map_err(to_napi_error)
}

/// Synchronizes many independent documents in parallel.
///
/// # Arguments
///
/// * `inputs` - Documents to process, each with an id and source text
/// * `options` - Optional batch options (thread count, error handling, config)
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { synchronizeBatch } = require('numtoc-napi');
///
/// const result = synchronizeBatch(
///   [{ id: 'a.md', source: '# A' }, { id: 'b.md', source: '# B' }],
///   { continueOnError: true },
/// );
/// console.log(`${result.stats.changed} of ${result.stats.total} changed`);
/// ```
#[napi(js_name = "synchronizeBatch")]
pub fn synchronize_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let sync_options = to_sync_options(opts.config.as_ref())?;

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);
    let changed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match numtoc_core::synchronize_toc_with_options(&input.source, sync_options) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                if result.changed {
                    changed.fetch_add(1, Ordering::Relaxed);
                }
                BatchResult {
                    id: input.id,
                    result: Some(convert_sync(result)),
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("{}: {}", input.id, e);
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.user_message()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error, in input order
        let run = || {
            let mut results = Vec::with_capacity(inputs.len());
            for input in inputs {
                let result = process_input(input);
                let had_error = result.error.is_some();
                results.push(result);
                if had_error {
                    break;
                }
            }
            results
        };
        match pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    };

    let elapsed = start.elapsed();

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            changed: changed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}
