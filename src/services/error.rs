use camino::Utf8PathBuf;
use thiserror::Error;

use crate::models::{Scope, VersionId};

/// Errors raised while discovering profiles or transplanting them.
#[derive(Error, Debug)]
pub enum ProfileCopyError {
    /// Candidate root has no recognized version folder, or cannot be listed.
    #[error("{path} is not a WoW install directory: {reason}")]
    InvalidRoot { path: Utf8PathBuf, reason: String },

    #[error("Failed to list {path}: {source}")]
    DiscoveryFailed {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "No valid WTF configurations found in {version}. Try logging into a character on this version of the client, first!"
    )]
    EmptyProfileSet { version: VersionId },

    #[error("Skipping {scope}-level copying - source and destination are the same")]
    SelfCopy { scope: Scope },

    #[error("Not copying {source_path}: {source}")]
    FileCopyFailed {
        source_path: Utf8PathBuf,
        destination_path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove cache file {path}: {source}")]
    CacheInvalidationFailed {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileCopyError {
    /// Whether the run can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProfileCopyError::InvalidRoot { .. }
                | ProfileCopyError::SelfCopy { .. }
                | ProfileCopyError::FileCopyFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_recoverable_classification() {
        let invalid = ProfileCopyError::InvalidRoot {
            path: "/tmp".into(),
            reason: "no version folders".to_string(),
        };
        let discovery = ProfileCopyError::DiscoveryFailed {
            path: "/tmp/_retail_/WTF/Account".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let cache = ProfileCopyError::CacheInvalidationFailed {
            path: "/tmp/cache.md5".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert!(invalid.is_recoverable());
        assert!(!discovery.is_recoverable());
        assert!(!cache.is_recoverable());
        assert!(!ProfileCopyError::EmptyProfileSet { version: VersionId::Retail }.is_recoverable());
    }

    #[test]
    fn test_empty_profile_set_message_is_actionable() {
        let err = ProfileCopyError::EmptyProfileSet {
            version: VersionId::Classic,
        };
        assert!(err.to_string().contains("Try logging into a character"));
        assert!(err.to_string().contains("_classic_"));
    }
}
