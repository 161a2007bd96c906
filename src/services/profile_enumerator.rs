//! Walks `WTF/Account` to find every (account, server, character) profile.
//!
//! Layout under `<root>/<version>/WTF/Account/`:
//!
//! ```text
//! Account/
//!   SavedVariables/            shared, not an account
//!   ACCOUNT1/
//!     SavedVariables/          account-wide, not a server
//!     bindings-cache.wtf
//!     Server/
//!       Character/             any directory here is a character
//! ```

use camino::Utf8Path;

use crate::models::{ProfileIdentity, ProfileSet, SAVED_VARIABLES_DIR, VersionId};
use crate::services::error::ProfileCopyError;
use crate::services::fs::FileSystem;

/// Finds every profile under one version of an install.
///
/// Any directory that cannot be listed aborts the whole walk with
/// [`ProfileCopyError::DiscoveryFailed`]; no partial set is returned. A
/// version with no characters yields an empty set.
pub fn enumerate_profiles(
    fs: &dyn FileSystem,
    install_root: &Utf8Path,
    version: VersionId,
) -> Result<ProfileSet, ProfileCopyError> {
    let account_root = version.account_root(install_root);
    let mut profiles = ProfileSet::new();

    for account in namespace_dirs(fs, &account_root, true)? {
        let account_path = account_root.join(&account);

        for server in namespace_dirs(fs, &account_path, true)? {
            let server_path = account_path.join(&server);

            for character in namespace_dirs(fs, &server_path, false)? {
                profiles.push(ProfileIdentity::new(
                    account.as_str(),
                    server.as_str(),
                    character,
                ));
            }
        }
    }

    tracing::info!(
        "Found {} profile(s) in {}",
        profiles.len(),
        version.folder_name()
    );

    Ok(profiles)
}

/// Names of the sub-directories of `path`, optionally without the reserved
/// saved-variables folder.
fn namespace_dirs(
    fs: &dyn FileSystem,
    path: &Utf8Path,
    exclude_reserved: bool,
) -> Result<Vec<String>, ProfileCopyError> {
    let entries = fs
        .list_dir(path)
        .map_err(|source| ProfileCopyError::DiscoveryFailed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(entries
        .into_iter()
        .filter(|entry| entry.is_dir)
        .filter(|entry| !(exclude_reserved && entry.name == SAVED_VARIABLES_DIR))
        .map(|entry| entry.name)
        .collect())
}

/// Distinct accounts in first-seen order.
pub fn accounts(profiles: &[ProfileIdentity]) -> Vec<String> {
    profiles
        .iter()
        .map(|p| p.account.clone())
        .collect::<indexmap::IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct servers of one account in first-seen order.
pub fn servers(profiles: &[ProfileIdentity], account: &str) -> Vec<String> {
    profiles
        .iter()
        .filter(|p| p.account == account)
        .map(|p| p.server.clone())
        .collect::<indexmap::IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Characters of one account and server, in listing order.
pub fn characters(profiles: &[ProfileIdentity], account: &str, server: &str) -> Vec<String> {
    profiles
        .iter()
        .filter(|p| p.account == account && p.server == server)
        .map(|p| p.character.clone())
        .collect()
}
