//! Turns discovered installs and profiles into concrete user choices.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::models::{CopyTarget, ProfileIdentity, VersionId};
use crate::services::error::ProfileCopyError;
use crate::services::fs::{FileSystem, parent_dir};
use crate::services::profile_enumerator::{self, enumerate_profiles};
use crate::services::version_discovery::is_install_root;
use crate::ui::prompt::Prompter;

/// Sentinel entry for moving one directory up while browsing.
pub const GO_UP: &str = ".. (go back)";

/// Which end of the copy is being picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl Endpoint {
    fn preposition(self) -> &'static str {
        match self {
            Endpoint::Source => "from",
            Endpoint::Destination => "to",
        }
    }
}

/// Browse the directory tree from `start` until the user lands on an install root.
///
/// Never ascends past the filesystem root. A directory that cannot be listed
/// is reported and browsing stays where it was.
pub fn browse_for_install_root(
    prompter: &dyn Prompter,
    fs: &dyn FileSystem,
    start: &Utf8Path,
) -> Result<Utf8PathBuf> {
    let mut current = start.to_path_buf();
    let mut entries = list_subdirs(fs, &current)
        .with_context(|| format!("Cannot browse from {}", current))?;

    loop {
        let parent = parent_dir(&current);
        let mut options = Vec::with_capacity(entries.len() + 1);
        if parent.is_some() {
            options.push(GO_UP.to_string());
        }
        options.extend(entries.iter().cloned());

        if options.is_empty() {
            anyhow::bail!("{} has no sub-directories to browse", current);
        }

        let index = prompter.select(
            &format!("Select a WoW Install directory ({})", current),
            &options,
        )?;
        let next = match (&parent, options[index].as_str()) {
            (Some(parent), GO_UP) => parent.clone(),
            (_, name) => current.join(name),
        };

        if is_install_root(fs, &next) {
            tracing::info!("Found WoW install. Location: {}", next);
            return Ok(next);
        }

        match list_subdirs(fs, &next) {
            Ok(next_entries) => {
                current = next;
                entries = next_entries;
            }
            Err(e) => tracing::warn!("Cannot open {}: {}", next, e),
        }
    }
}

fn list_subdirs(fs: &dyn FileSystem, dir: &Utf8Path) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = fs
        .list_dir(dir)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| entry.name)
        .collect();
    names.sort_by_key(|name| name.to_lowercase());
    Ok(names)
}

/// Settle on an install root: use `candidate` if the user confirms it,
/// otherwise browse from `browse_from`.
pub fn confirm_or_browse(
    prompter: &dyn Prompter,
    fs: &dyn FileSystem,
    candidate: Option<&Utf8Path>,
    browse_from: &Utf8Path,
) -> Result<Utf8PathBuf> {
    if let Some(candidate) = candidate {
        if is_install_root(fs, candidate) {
            tracing::info!("Found WoW install. Location: {}", candidate);
            if prompter.confirm("Is this directory correct?", true)? {
                return Ok(candidate.to_path_buf());
            }
        } else {
            tracing::warn!("{} does not look like a WoW install directory", candidate);
        }
    }

    browse_for_install_root(prompter, fs, browse_from)
}

/// Ask for version, account, server and character of one copy endpoint.
///
/// Fails with [`ProfileCopyError::EmptyProfileSet`] before prompting for an
/// account if the chosen version has no profiles.
pub fn select_copy_target(
    prompter: &dyn Prompter,
    fs: &dyn FileSystem,
    install_root: &Utf8Path,
    versions: &[VersionId],
    endpoint: Endpoint,
) -> Result<CopyTarget> {
    let preposition = endpoint.preposition();

    let labels: Vec<String> = versions.iter().map(|v| v.label().to_string()).collect();
    let version = versions[choose(
        prompter,
        &format!("WoW Version to copy {preposition}"),
        &labels,
    )?];
    tracing::debug!("chose {}", version.folder_name());

    let profiles = enumerate_profiles(fs, install_root, version)?;
    if profiles.is_empty() {
        return Err(ProfileCopyError::EmptyProfileSet { version }.into());
    }

    let accounts = profile_enumerator::accounts(&profiles);
    let account = accounts[choose(
        prompter,
        &format!("Account to copy {preposition}"),
        &accounts,
    )?]
    .clone();
    tracing::debug!("chose {}", account);

    let servers = profile_enumerator::servers(&profiles, &account);
    let server = servers[choose(
        prompter,
        &format!("Server to copy {preposition}"),
        &servers,
    )?]
    .clone();
    tracing::debug!("chose {}", server);

    let characters = profile_enumerator::characters(&profiles, &account, &server);
    let character = characters[choose(
        prompter,
        &format!("Character to copy {preposition}"),
        &characters,
    )?]
    .clone();
    tracing::debug!("chose {}", character);

    Ok(CopyTarget::new(
        version,
        ProfileIdentity::new(account, server, character),
    ))
}

/// Prompt for one of `options`, refusing empty lists and out-of-range answers.
fn choose(prompter: &dyn Prompter, prompt: &str, options: &[String]) -> Result<usize> {
    if options.is_empty() {
        anyhow::bail!("Nothing to choose for \"{}\"", prompt);
    }
    let index = prompter.select(prompt, options)?;
    if index >= options.len() {
        anyhow::bail!("Choice {} out of range for \"{}\"", index, prompt);
    }
    Ok(index)
}
