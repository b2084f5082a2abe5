/// Default history log, relative to the working directory: "history.txt"
pub(crate) const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// The active log is rotated once its size exceeds this many bytes
pub(crate) const MAX_HISTORY_BYTES: u64 = 1_000_000;

/// Timestamp embedded in backup names: "20250115093000"
pub(crate) const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Extension of rotated backup files
pub(crate) const BACKUP_EXTENSION: &str = "bak";

/// Field delimiter of a history line
pub(crate) const ENTRY_SEPARATOR: &str = " | ";
