//! Persisted calculation history
//!
//! A newline-delimited text log that is appended to after each valid
//! computation and rotated to a timestamped backup once it grows too large.

mod entry;
mod fs;
mod rotation;
mod store;

pub(crate) use entry::HistoryEntry;
pub(crate) use fs::{HistoryFs, OsFs};
pub(crate) use store::HistoryStore;

#[cfg(test)]
pub(crate) use fs::mem::MemFs;
