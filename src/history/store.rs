use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::consts::MAX_HISTORY_BYTES;
use crate::error::HistoryError;

use super::fs::{HistoryFs, OsFs};
use super::rotation::backup_path;

/// Append-only history log with size-based rotation.
///
/// Nothing here is fatal: reads degrade to an empty history, write failures
/// are returned for the caller to show as a warning, and rotation problems
/// are dropped.
#[derive(Debug)]
pub(crate) struct HistoryStore<F: HistoryFs = OsFs> {
    path: PathBuf,
    fs: F,
}

impl HistoryStore<OsFs> {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, OsFs)
    }
}

impl<F: HistoryFs> HistoryStore<F> {
    pub(crate) fn with_fs(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn fs(&self) -> &F {
        &self.fs
    }

    /// All lines of the log, oldest first. Missing, unreadable or non-UTF-8
    /// logs load as empty.
    pub(crate) fn load(&self) -> Vec<String> {
        if !self.fs.exists(&self.path) {
            return Vec::new();
        }
        match self.fs.read_to_string(&self.path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(e) => {
                debug!(
                    path = %self.path.display(),
                    error = %e,
                    "history unreadable, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Write one line and run the rotation check. Returns the backup path
    /// when this append pushed the log over the limit.
    pub(crate) fn append(&self, line: &str) -> Result<Option<PathBuf>, HistoryError> {
        self.fs
            .append(&self.path, &format!("{line}\n"))
            .map_err(|source| HistoryError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(self.rotate_if_needed())
    }

    /// Best-effort rotation; failures are swallowed.
    pub(crate) fn rotate_if_needed(&self) -> Option<PathBuf> {
        self.rotate_if_needed_at(Utc::now())
    }

    pub(crate) fn rotate_if_needed_at(&self, now: DateTime<Utc>) -> Option<PathBuf> {
        match self.try_rotate(now) {
            Ok(rotated) => rotated,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "history rotation skipped");
                None
            }
        }
    }

    fn try_rotate(&self, now: DateTime<Utc>) -> io::Result<Option<PathBuf>> {
        let Some(size) = self.fs.len(&self.path)? else {
            return Ok(None);
        };
        if size <= MAX_HISTORY_BYTES {
            return Ok(None);
        }

        let backup = backup_path(&self.path, now, |p| self.fs.exists(p));
        self.fs.rename(&self.path, &backup)?;
        self.fs.create_empty(&self.path)?;
        debug!(size, backup = %backup.display(), "history rotated");
        Ok(Some(backup))
    }
}
