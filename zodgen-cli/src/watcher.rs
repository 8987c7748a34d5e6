//! File watcher for development mode.
//!
//! Watches the definition directory and reports debounced changes to
//! `.json` files so schemas can be regenerated.

use crate::error::{CliResult, WatchError};
use crate::scanner::is_definition_file;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

/// A change to a watched definition file.
#[derive(Debug)]
pub enum WatchEvent {
    /// A file was created or modified.
    Changed(PathBuf),
    /// A file was removed.
    Removed(PathBuf),
    /// The watcher reported an error.
    Error(WatchError),
}

/// File watcher for definition files.
pub struct FileWatcher {
    root: PathBuf,
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a new file watcher for the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            debounce_ms: 500,
        }
    }

    /// Start watching.
    ///
    /// Events arrive on the returned receiver for as long as the returned
    /// debouncer is kept alive.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: DebounceEventResult| forward(&tx, result),
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&self.root, RecursiveMode::Recursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        tracing::debug!(root = %self.root.display(), "Watching for changes");
        Ok((debouncer, rx))
    }

    /// Get the root directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn forward(tx: &Sender<WatchEvent>, result: DebounceEventResult) {
    match result {
        Ok(events) => {
            for event in events {
                if let Some(watch_event) = classify(event.path) {
                    let _ = tx.send(watch_event);
                }
            }
        }
        Err(e) => {
            let _ = tx.send(WatchEvent::Error(WatchError::Notify(e.to_string())));
        }
    }
}

fn classify(path: PathBuf) -> Option<WatchEvent> {
    if !is_definition_file(&path) {
        return None;
    }
    Some(if path.exists() {
        WatchEvent::Changed(path)
    } else {
        WatchEvent::Removed(path)
    })
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Changed(p) | WatchEvent::Removed(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }
}
