use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::consts::{BACKUP_EXTENSION, BACKUP_TIMESTAMP_FORMAT};

/// Backup name for a rotation at `now`: `<stem>_<YYYYMMDDHHMMSS>.bak` next
/// to the log. Two rotations in the same second would collide, so a `_N`
/// counter is added until the name is free.
pub(crate) fn backup_path(
    log_path: &Path,
    now: DateTime<Utc>,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let stem = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "history".to_string());
    let stamp = now.format(BACKUP_TIMESTAMP_FORMAT);
    let dir = log_path.parent().unwrap_or_else(|| Path::new(""));

    let candidate = dir.join(format!("{stem}_{stamp}.{BACKUP_EXTENSION}"));
    if !exists(candidate.as_path()) {
        return candidate;
    }
    (1u32..)
        .map(|n| dir.join(format!("{stem}_{stamp}_{n}.{BACKUP_EXTENSION}")))
        .find(|p| !exists(p.as_path()))
        .unwrap_or(candidate)
}
