//! Filesystem boundary.
//!
//! Discovery, planning and execution only touch the disk through
//! [`FileSystem`], so tests can swap in a mock for failures that are hard to
//! provoke on a real filesystem (for example permission errors when running as
//! root).

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// List a directory in the order the OS returns entries.
    fn list_dir(&self, path: &Utf8Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Copy one file, overwriting the destination. Returns bytes copied.
    fn copy_file(&self, source: &Utf8Path, destination: &Utf8Path) -> io::Result<u64>;

    /// Remove one file. A missing file surfaces as [`io::ErrorKind::NotFound`].
    fn remove_file(&self, path: &Utf8Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_dir(&self, path: &Utf8Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!("Ignoring non UTF-8 entry in {}", path);
                continue;
            };
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntryInfo { name, is_dir });
        }
        Ok(entries)
    }

    fn copy_file(&self, source: &Utf8Path, destination: &Utf8Path) -> io::Result<u64> {
        // fs::copy onto itself truncates the file before reading it
        if source == destination {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same",
            ));
        }
        fs::copy(source, destination)
    }

    fn remove_file(&self, path: &Utf8Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Parent of `path`, or `None` at the filesystem root.
pub fn parent_dir(path: &Utf8Path) -> Option<Utf8PathBuf> {
    path.parent()
        .filter(|p| !p.as_str().is_empty())
        .map(Utf8Path::to_path_buf)
}
