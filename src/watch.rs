// ABOUTME: Watch module for monitoring Slideas sources
// ABOUTME: Re-runs the deck conversion whenever a source deck changes

use log::{debug, error, info};
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::{DebounceEventResult, new_debouncer};

use crate::deck::{DeckConverter, is_deck_name};
use crate::errors::{Result, SlideasError};
use crate::utils;

/// Configuration for watch mode
pub struct WatchConfig {
    pub converter: DeckConverter,

    /// Debounce time in milliseconds
    pub debounce_ms: u64,
}

/// Converts all decks once, then again on every relevant change until the
/// event channel closes.
pub fn watch_decks(config: WatchConfig) -> Result<()> {
    let converter = &config.converter;
    utils::validate_directory_exists(&converter.source_dir)?;

    run_batch(converter);

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(config.debounce_ms), None, tx)
        .map_err(|e| SlideasError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    let watch_path = utils::get_absolute_path(&converter.source_dir)?;
    debouncer
        .watcher()
        .watch(&watch_path, RecursiveMode::NonRecursive)
        .map_err(|e| {
            SlideasError::WatchError(format!(
                "Failed to start watching {:?}: {}",
                watch_path, e
            ))
        })?;

    info!("Watching for changes in {:?}", watch_path);
    println!(
        "Watching for changes in {:?} (Press Ctrl+C to stop)",
        watch_path
    );

    let mut last_processed = Instant::now();

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events.iter().any(|event| {
                    event.paths.iter().any(|path| {
                        let relevant = is_relevant_path(path);
                        if relevant {
                            debug!("Detected relevant change in {:?}", path);
                        }
                        relevant
                    })
                });

                let now = Instant::now();
                if relevant
                    && now.duration_since(last_processed)
                        > Duration::from_millis(config.debounce_ms)
                {
                    run_batch(converter);
                    last_processed = now;
                }
            }
            Err(errors) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    Ok(())
}

/// Only deck sources trigger a rebuild; the staleness check sorts out which ones.
pub fn is_relevant_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| is_deck_name(&name.to_string_lossy()))
        .unwrap_or(false)
}

fn run_batch(converter: &DeckConverter) {
    match converter.run() {
        Ok(report) => println!(
            "{} converted, {} skipped, {} failed",
            report.converted(),
            report.skipped(),
            report.failed()
        ),
        Err(e) => error!("Failed to convert decks: {}", e),
    }
}
