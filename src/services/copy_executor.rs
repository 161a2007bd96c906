use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::io;

use crate::models::{CopyPlan, CopyPlanEntry, Scope};
use crate::services::error::ProfileCopyError;
use crate::services::fs::FileSystem;

/// Overall result of a copy run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    /// Every planned file was copied.
    Clean,
    /// At least one planned file failed to copy.
    Degraded,
}

/// Outcome of one plan entry
#[derive(Debug)]
pub struct CopyOutcome {
    pub entry: CopyPlanEntry,
    /// Bytes copied, or a [`ProfileCopyError::FileCopyFailed`].
    pub result: Result<u64, ProfileCopyError>,
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// What happened to a cache artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheRemoval {
    Removed,
    NotPresent,
}

/// Per-entry outcomes in plan order plus cache invalidation results.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
    pub caches: Vec<(Utf8PathBuf, CacheRemoval)>,
}

impl CopyReport {
    pub fn status(&self) -> CopyStatus {
        if self.outcomes.iter().all(CopyOutcome::is_success) {
            CopyStatus::Clean
        } else {
            CopyStatus::Degraded
        }
    }

    pub fn copied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn bytes_copied(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    /// Failed entries with their errors, in plan order.
    pub fn failures(&self) -> impl Iterator<Item = (&CopyPlanEntry, &ProfileCopyError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.entry, e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn copied_in(&self, scope: Scope) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.entry.scope == scope && o.is_success())
            .count()
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[COPY] copied={} failed={} bytes={} caches_removed={}",
            self.copied_count(),
            self.failure_count(),
            self.bytes_copied(),
            self.caches
                .iter()
                .filter(|(_, r)| *r == CacheRemoval::Removed)
                .count()
        )
    }
}

/// Runs a [`CopyPlan`] against a [`FileSystem`].
pub struct CopyExecutor<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> CopyExecutor<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Copy every entry in order, then invalidate the destination caches.
    ///
    /// A failed copy is recorded and the run moves on to the next entry.
    /// Failing to remove a cache file that exists is fatal and returned as
    /// [`ProfileCopyError::CacheInvalidationFailed`].
    pub fn execute(&self, plan: CopyPlan) -> Result<CopyReport, ProfileCopyError> {
        let mut report = CopyReport::default();

        for entry in plan.entries {
            let result = self.copy_entry(&entry);
            report.outcomes.push(CopyOutcome { entry, result });
        }

        for cache in plan.cache_files {
            let removal = self.invalidate_cache(&cache)?;
            report.caches.push((cache, removal));
        }

        tracing::info!("{}", report);
        Ok(report)
    }

    fn copy_entry(&self, entry: &CopyPlanEntry) -> Result<u64, ProfileCopyError> {
        match self.fs.copy_file(&entry.source, &entry.destination) {
            Ok(bytes) => {
                tracing::info!("Copied {}", entry.source);
                Ok(bytes)
            }
            Err(source) => {
                let err = ProfileCopyError::FileCopyFailed {
                    source_path: entry.source.clone(),
                    destination_path: entry.destination.clone(),
                    source,
                };
                tracing::warn!("{}", err);
                Err(err)
            }
        }
    }

    fn invalidate_cache(&self, path: &Utf8Path) -> Result<CacheRemoval, ProfileCopyError> {
        match self.fs.remove_file(path) {
            Ok(()) => {
                tracing::info!("Removed {}", path);
                Ok(CacheRemoval::Removed)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No cache to remove at {}", path);
                Ok(CacheRemoval::NotPresent)
            }
            Err(source) => Err(ProfileCopyError::CacheInvalidationFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
