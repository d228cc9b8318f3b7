//! File watcher for dictionary sources
//!
//! Watches word-list files for changes. Each debounced change event
//! triggers a full reload and index rebuild in the caller; the rebuild
//! itself publishes atomically, so watching never exposes a partial
//! index to readers.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Debounced watcher over a fixed set of dictionary files
pub struct Watcher {
    /// Debounced watcher
    _debouncer: Debouncer<RecommendedWatcher>,
    /// Event receiver
    receiver: Receiver<Result<Vec<DebouncedEvent>, notify::Error>>,
    /// Watched paths
    paths: Vec<PathBuf>,
}

impl Watcher {
    /// Create a new watcher for the given files.
    ///
    /// Files are watched through their parent directory so editors that
    /// replace-on-save (write temp, rename) still produce events.
    pub fn new(paths: &[PathBuf]) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(Duration::from_millis(300), tx)?;

        for path in paths {
            let watch_path = if path.is_file() {
                path.parent().unwrap_or(Path::new("."))
            } else {
                path.as_path()
            };

            debouncer
                .watcher()
                .watch(watch_path, RecursiveMode::NonRecursive)?;
        }

        Ok(Self {
            _debouncer: debouncer,
            receiver: rx,
            paths: paths.to_vec(),
        })
    }

    /// Block until one of the watched files changes; `None` when the
    /// watch channel is gone.
    pub fn wait(&self) -> Option<Vec<PathBuf>> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(events)) => {
                    let mut changed: Vec<PathBuf> = Vec::new();

                    for event in events {
                        if self.matches_watched_path(&event.path) && !changed.contains(&event.path)
                        {
                            changed.push(event.path);
                        }
                    }

                    if !changed.is_empty() {
                        return Some(changed);
                    }
                }
                Ok(Err(_)) => continue,
                Err(_) => return None,
            }
        }
    }

    /// Check if a path matches our watched files
    fn matches_watched_path(&self, path: &Path) -> bool {
        for watched in &self.paths {
            if watched.is_file() {
                if path == watched {
                    return true;
                }
            } else if path.starts_with(watched) {
                return true;
            }
        }
        false
    }

    /// Get the watched paths
    pub fn watched_paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
