use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::io;

use crate::models::{
    CopyManifest, CopyPlan, CopyPlanEntry, CopyTarget, SAVED_VARIABLES_DIR, Scope,
};
use crate::services::error::ProfileCopyError;
use crate::services::fs::FileSystem;

/// Builds the list of files to copy from one profile to another.
///
/// The only I/O is listing the source account and character `SavedVariables`
/// directories; nothing is opened or copied here.
pub struct CopyPlanResolver {
    manifest: CopyManifest,

    /// Matches saved-variable file names (`<anything>.lua`).
    saved_variable_pattern: Regex,
}

impl CopyPlanResolver {
    pub fn new(manifest: CopyManifest) -> Self {
        let pattern = format!(r"^.+{}$", regex::escape(manifest.saved_variable_suffix));
        Self {
            manifest,
            saved_variable_pattern: Regex::new(&pattern)
                .expect("escaped suffix is always a valid pattern"),
        }
    }

    pub fn manifest(&self) -> &CopyManifest {
        &self.manifest
    }

    pub fn is_saved_variable(&self, file_name: &str) -> bool {
        self.saved_variable_pattern.is_match(file_name)
    }

    /// Resolve the copy plan between two targets of the same install.
    ///
    /// Account scope is skipped when both targets name the same account.
    /// Character scope is always planned, unless both targets resolve to the
    /// very same character directory.
    pub fn resolve(
        &self,
        fs: &dyn FileSystem,
        install_root: &Utf8Path,
        source: &CopyTarget,
        destination: &CopyTarget,
    ) -> Result<CopyPlan, ProfileCopyError> {
        let mut plan = CopyPlan::default();

        let src_account = source.account_dir(install_root);
        let dst_account = destination.account_dir(install_root);

        if source.identity.account == destination.identity.account {
            tracing::warn!("{}", ProfileCopyError::SelfCopy { scope: Scope::Account });
            plan.skipped_scopes.push(Scope::Account);
        } else {
            self.plan_scope(fs, Scope::Account, &src_account, &dst_account, &mut plan)?;
        }

        let src_character = source.character_dir(install_root);
        let dst_character = destination.character_dir(install_root);

        if src_character == dst_character {
            tracing::warn!("{}", ProfileCopyError::SelfCopy { scope: Scope::Character });
            plan.skipped_scopes.push(Scope::Character);
        } else {
            self.plan_scope(
                fs,
                Scope::Character,
                &src_character,
                &dst_character,
                &mut plan,
            )?;
        }

        plan.cache_files = vec![
            dst_account.join(self.manifest.cache_file),
            dst_character.join(self.manifest.cache_file),
        ];

        tracing::info!(
            "Planned {} file(s): {} account-level, {} character-level",
            plan.len(),
            plan.entries_in(Scope::Account).count(),
            plan.entries_in(Scope::Character).count()
        );

        Ok(plan)
    }

    fn plan_scope(
        &self,
        fs: &dyn FileSystem,
        scope: Scope,
        src_dir: &Utf8Path,
        dst_dir: &Utf8Path,
        plan: &mut CopyPlan,
    ) -> Result<(), ProfileCopyError> {
        for file in self.manifest.files_for(scope) {
            plan.entries.push(CopyPlanEntry::new(
                scope,
                src_dir.join(file),
                dst_dir.join(file),
            ));
        }

        let src_sv = src_dir.join(SAVED_VARIABLES_DIR);
        let dst_sv = dst_dir.join(SAVED_VARIABLES_DIR);
        for name in self.saved_variable_files(fs, &src_sv)? {
            plan.entries.push(CopyPlanEntry::new(
                scope,
                src_sv.join(&name),
                dst_sv.join(&name),
            ));
        }

        Ok(())
    }

    /// Saved-variable files present in `dir`. A missing directory has none.
    fn saved_variable_files(
        &self,
        fs: &dyn FileSystem,
        dir: &Utf8Path,
    ) -> Result<Vec<String>, ProfileCopyError> {
        let entries = match fs.list_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("No SavedVariables directory at {}", dir);
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ProfileCopyError::DiscoveryFailed {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        let names: Vec<String> = entries
            .into_iter()
            .filter(|entry| !entry.is_dir && self.is_saved_variable(&entry.name))
            .map(|entry| entry.name)
            .collect();

        tracing::debug!("{} saved-variable file(s) in {}", names.len(), dir);
        Ok(names)
    }
}

impl Default for CopyPlanResolver {
    fn default() -> Self {
        Self::new(CopyManifest::default())
    }
}

/// Destination paths of a plan, in order.
pub fn destinations(plan: &CopyPlan) -> Vec<&Utf8PathBuf> {
    plan.entries.iter().map(|e| &e.destination).collect()
}
