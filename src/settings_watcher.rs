//! Settings file watcher for hot reload.
//!
//! Watches the directory containing the settings file rather than the file
//! itself, since editors often replace the file on save.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::LabelResult;

pub use crate::settings::default_settings_path;

/// A change observed on the settings file.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> LabelResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching settings at {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next event affecting the settings file, without blocking.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            let res = match self.rx.try_recv() {
                Ok(res) => res,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            };
            match res {
                Ok(event) => {
                    if !event.paths.iter().any(|p| self.is_settings_file(p)) {
                        continue;
                    }
                    if let Some(mapped) = classify(&event.kind) {
                        return Some(mapped);
                    }
                }
                Err(e) => return Some(SettingsEvent::Error(e.to_string())),
            }
        }
    }

    fn is_settings_file(&self, candidate: &Path) -> bool {
        candidate == self.path || candidate.file_name() == self.path.file_name()
    }
}

fn classify(kind: &EventKind) -> Option<SettingsEvent> {
    match kind {
        EventKind::Create(_) => Some(SettingsEvent::Created),
        EventKind::Modify(_) => Some(SettingsEvent::Modified),
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        _ => None,
    }
}
