//! Filesystem seam for the history store
//!
//! The store only talks to disk through [`HistoryFs`], so rotation and
//! failure handling can be exercised without touching real files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub(crate) trait HistoryFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Append `data`, creating the file if needed. No handle outlives the call.
    fn append(&self, path: &Path, data: &str) -> io::Result<()>;

    /// Size in bytes, `None` when the file does not exist
    fn len(&self, path: &Path) -> io::Result<Option<u64>>;

    fn exists(&self, path: &Path) -> bool;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Create (or truncate to) an empty file
    fn create_empty(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OsFs;

impl HistoryFs for OsFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn append(&self, path: &Path, data: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(data.as_bytes())?;
        file.flush()
    }

    fn len(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn create_empty(&self, path: &Path) -> io::Result<()> {
        fs::File::create(path).map(drop)
    }
}

/// In-memory filesystem for tests, with switchable write failures
#[cfg(test)]
pub(crate) mod mem {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::HistoryFs;

    #[derive(Debug, Default)]
    pub(crate) struct MemFs {
        files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
        pub(crate) fail_writes: Cell<bool>,
        pub(crate) fail_renames: Cell<bool>,
    }

    impl MemFs {
        pub(crate) fn put(&self, path: &Path, data: impl Into<Vec<u8>>) {
            self.files.borrow_mut().insert(path.to_path_buf(), data.into());
        }

        pub(crate) fn get(&self, path: &Path) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|b| String::from_utf8_lossy(b).into_owned())
        }

        pub(crate) fn paths(&self) -> Vec<PathBuf> {
            self.files.borrow().keys().cloned().collect()
        }
    }

    impl HistoryFs for MemFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            let files = self.files.borrow();
            let bytes = files
                .get(path)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            String::from_utf8(bytes.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }

        fn append(&self, path: &Path, data: &str) -> io::Result<()> {
            if self.fail_writes.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.files
                .borrow_mut()
                .entry(path.to_path_buf())
                .or_default()
                .extend_from_slice(data.as_bytes());
            Ok(())
        }

        fn len(&self, path: &Path) -> io::Result<Option<u64>> {
            Ok(self.files.borrow().get(path).map(|b| b.len() as u64))
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
            if self.fail_renames.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
            }
            let mut files = self.files.borrow_mut();
            let data = files
                .remove(from)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
            files.insert(to.to_path_buf(), data);
            Ok(())
        }

        fn create_empty(&self, path: &Path) -> io::Result<()> {
            if self.fail_writes.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.files.borrow_mut().insert(path.to_path_buf(), Vec::new());
            Ok(())
        }
    }
}
