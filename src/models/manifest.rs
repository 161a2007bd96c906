use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Which sub-tree a copy applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Account,
    Character,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Account => write!(f, "account"),
            Scope::Character => write!(f, "character"),
        }
    }
}

/// Fixed list of client files copied per scope.
///
/// Saved-variable files are not listed here; they are discovered at plan time
/// by matching `saved_variable_suffix` against `SavedVariables/` listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyManifest {
    pub account_files: &'static [&'static str],
    pub character_files: &'static [&'static str],
    pub saved_variable_suffix: &'static str,
    pub cache_file: &'static str,
}

/// The manifest used by the tool.
pub const DEFAULT_MANIFEST: CopyManifest = CopyManifest {
    account_files: &[
        "bindings-cache.wtf",
        "config-cache.wtf",
        "macros-cache.txt",
        "edit-mode-cache-account.txt",
    ],
    character_files: &[
        "AddOns.txt",
        "config-cache.wtf",
        "layout-local.txt",
        "macros-cache.txt",
        "edit-mode-cache-character.txt",
    ],
    saved_variable_suffix: ".lua",
    cache_file: "cache.md5",
};

impl CopyManifest {
    pub fn files_for(&self, scope: Scope) -> &'static [&'static str] {
        match scope {
            Scope::Account => self.account_files,
            Scope::Character => self.character_files,
        }
    }
}

impl Default for CopyManifest {
    fn default() -> Self {
        DEFAULT_MANIFEST
    }
}

/// One planned file copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlanEntry {
    pub scope: Scope,
    pub source: Utf8PathBuf,
    pub destination: Utf8PathBuf,
}

impl CopyPlanEntry {
    pub fn new(scope: Scope, source: Utf8PathBuf, destination: Utf8PathBuf) -> Self {
        Self {
            scope,
            source,
            destination,
        }
    }

    /// File name of the source, used in short log lines.
    pub fn file_name(&self) -> &str {
        self.source.file_name().unwrap_or(self.source.as_str())
    }
}

/// Ordered copy plan plus the cache artifacts to invalidate afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    pub entries: Vec<CopyPlanEntry>,
    /// Scopes left out because source and destination would be the same files.
    pub skipped_scopes: Vec<Scope>,
    /// Destination account cache first, then destination character cache.
    pub cache_files: Vec<Utf8PathBuf>,
}

impl CopyPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries_in(&self, scope: Scope) -> impl Iterator<Item = &CopyPlanEntry> {
        self.entries.iter().filter(move |e| e.scope == scope)
    }

    pub fn contains_destination(&self, path: &Utf8Path) -> bool {
        self.entries.iter().any(|e| e.destination == path)
    }
}
