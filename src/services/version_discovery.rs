//! Detects which client versions an install root contains.

use camino::Utf8Path;

use crate::models::VersionId;
use crate::services::error::ProfileCopyError;
use crate::services::fs::FileSystem;

/// Lists the recognized version folders directly under `install_root`.
///
/// Order follows the directory listing. An empty result means the directory
/// is not an install root. A root that cannot be listed at all is reported as
/// [`ProfileCopyError::InvalidRoot`] so callers can try another path.
pub fn discover_versions(
    fs: &dyn FileSystem,
    install_root: &Utf8Path,
) -> Result<Vec<VersionId>, ProfileCopyError> {
    let entries = fs
        .list_dir(install_root)
        .map_err(|e| ProfileCopyError::InvalidRoot {
            path: install_root.to_path_buf(),
            reason: e.to_string(),
        })?;

    let versions: Vec<VersionId> = entries
        .iter()
        .filter(|entry| entry.is_dir)
        .filter_map(|entry| VersionId::from_folder_name(&entry.name))
        .collect();

    tracing::debug!(
        "Found {} version folder(s) in {}: {:?}",
        versions.len(),
        install_root,
        versions
    );

    Ok(versions)
}

/// Whether `dir` looks like an install root.
pub fn is_install_root(fs: &dyn FileSystem, dir: &Utf8Path) -> bool {
    matches!(discover_versions(fs, dir), Ok(versions) if !versions.is_empty())
}

/// Like [`discover_versions`], but an empty result is an error.
pub fn require_versions(
    fs: &dyn FileSystem,
    install_root: &Utf8Path,
) -> Result<Vec<VersionId>, ProfileCopyError> {
    let versions = discover_versions(fs, install_root)?;
    if versions.is_empty() {
        return Err(ProfileCopyError::InvalidRoot {
            path: install_root.to_path_buf(),
            reason: "no recognized version folders".to_string(),
        });
    }
    Ok(versions)
}
