//! Config file watcher for hot-reloading the editor config.
//!
//! The notify callback runs on the watcher's own thread; it only records the
//! latest event in a shared slot. The editor drains that slot from its timer
//! task with [`ConfigWatcher::poll`].

use crate::error::EditorResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// What happened to the config file since the last poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
    pending: Arc<Mutex<Option<ConfigEvent>>>,
}

impl ConfigWatcher {
    /// Watch `path`. The parent directory is watched so the file may be
    /// created or replaced after the watcher starts.
    pub fn new(path: PathBuf) -> EditorResult<Self> {
        let pending: Arc<Mutex<Option<ConfigEvent>>> = Arc::new(Mutex::new(None));
        let slot = pending.clone();
        // Event paths may come back canonicalized, so match on the file name.
        let target = path.file_name().map(|name| name.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => {
                    if !event.paths.iter().any(|p| p.file_name() == target.as_deref()) {
                        return;
                    }
                    match event.kind {
                        EventKind::Create(_) => ConfigEvent::Created,
                        EventKind::Modify(_) => ConfigEvent::Modified,
                        EventKind::Remove(_) => ConfigEvent::Deleted,
                        _ => return,
                    }
                }
                Err(e) => ConfigEvent::Error(e.to_string()),
            };
            *slot.lock() = Some(event);
        })?;

        let watch_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(watch_dir)?;
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching editor config");

        Ok(Self {
            _watcher: watcher,
            path,
            pending,
        })
    }

    /// Take the latest event, if any. Bursts collapse into one event.
    pub fn poll(&mut self) -> Option<ConfigEvent> {
        self.pending.lock().take()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
