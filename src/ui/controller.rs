// Run Controller - drives one interactive profile copy
//
// Coordinates:
// - install root resolution (remembered, guessed, or browsed)
// - source/destination selection
// - the overwrite confirmation gate
// - plan resolution and execution
// - the final summary

use crate::config::ConfigManager;
use crate::models::{CopyPlan, CopySettings, CopyTarget, Scope};
use crate::services::copy_executor::{CopyExecutor, CopyReport, CopyStatus};
use crate::services::copy_plan::CopyPlanResolver;
use crate::services::fs::FileSystem;
use crate::services::install_location::{browse_start, probable_install_location};
use crate::services::version_discovery::{is_install_root, require_versions};
use crate::ui::prompt::Prompter;
use crate::ui::selection::{Endpoint, confirm_or_browse, select_copy_target};
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

/// How a run ended, as seen by the calling shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every file copied.
    Completed,
    /// Copy finished but some files failed.
    CompletedWithWarnings,
    /// User said no at the overwrite confirmation; nothing was copied.
    Declined,
    /// Plan printed, nothing copied.
    DryRun,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Completed | RunOutcome::DryRun => 0,
            RunOutcome::Declined => 1,
            RunOutcome::CompletedWithWarnings => 2,
        }
    }
}

/// Exit code for runs that stopped on an error.
pub const FATAL_EXIT_CODE: u8 = 3;

/// Per-run options from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Install root given on the command line; bypasses guessing.
    pub install_dir: Option<Utf8PathBuf>,
    pub dry_run: bool,
}

/// Drives one run from install discovery to the final summary.
pub struct RunController<'a> {
    prompter: &'a dyn Prompter,
    fs: &'a dyn FileSystem,
    settings: CopySettings,
    config_manager: Option<&'a ConfigManager>,
    resolver: CopyPlanResolver,
}

impl<'a> RunController<'a> {
    pub fn new(prompter: &'a dyn Prompter, fs: &'a dyn FileSystem, settings: CopySettings) -> Self {
        Self {
            prompter,
            fs,
            settings,
            config_manager: None,
            resolver: CopyPlanResolver::default(),
        }
    }

    /// Persist the confirmed install root through `config_manager`.
    pub fn with_config_manager(mut self, config_manager: &'a ConfigManager) -> Self {
        self.config_manager = Some(config_manager);
        self
    }

    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome> {
        let install_root = self.resolve_install_root(options)?;
        let versions = require_versions(self.fs, &install_root)?;

        println!("WoW Install Directory: {}", install_root);

        println!(
            "First, pick the Version, Account, Server, and Character to copy configuration data from."
        );
        let source = select_copy_target(
            self.prompter,
            self.fs,
            &install_root,
            &versions,
            Endpoint::Source,
        )?;

        println!(
            "Next, pick the Version, Account, Server, and Character to apply that configuration data to."
        );
        let destination = select_copy_target(
            self.prompter,
            self.fs,
            &install_root,
            &versions,
            Endpoint::Destination,
        )?;

        tracing::info!("Source: {}", source);
        tracing::info!("Destination: {}", destination);
        println!("Copying from: {}", source);
        println!("Copying to: {}", destination);

        let plan = self
            .resolver
            .resolve(self.fs, &install_root, &source, &destination)?;

        if options.dry_run {
            for line in plan_lines(&plan) {
                println!("{line}");
            }
            return Ok(RunOutcome::DryRun);
        }

        println!("Take a backup of the relevant WTF folder(s) - This operation can cause data loss!");
        if !self.prompter.confirm(&overwrite_prompt(&destination), false)? {
            tracing::warn!("Copy declined, nothing was changed");
            return Ok(RunOutcome::Declined);
        }

        let report = CopyExecutor::new(self.fs).execute(plan)?;
        for line in summary_lines(&report) {
            println!("{line}");
        }

        Ok(match report.status() {
            CopyStatus::Clean => RunOutcome::Completed,
            CopyStatus::Degraded => RunOutcome::CompletedWithWarnings,
        })
    }

    fn resolve_install_root(&self, options: &RunOptions) -> Result<Utf8PathBuf> {
        if let Some(dir) = &options.install_dir {
            if is_install_root(self.fs, dir) {
                self.remember(dir);
                return Ok(dir.clone());
            }
            tracing::warn!("{} is not a WoW install directory", dir);
        }

        let candidate = if options.install_dir.is_some() {
            None
        } else {
            self.settings
                .install_dir
                .clone()
                .filter(|dir| is_install_root(self.fs, dir))
                .or_else(probable_install_location)
        };

        let browse_from = self.browse_start()?;
        let root = confirm_or_browse(self.prompter, self.fs, candidate.as_deref(), &browse_from)?;
        self.remember(&root);
        Ok(root)
    }

    fn browse_start(&self) -> Result<Utf8PathBuf> {
        if cfg!(windows) {
            let drive = self
                .prompter
                .input("Which drive is WoW located on? e.g. C, D")?;
            Ok(browse_start(Some(&drive)))
        } else {
            Ok(browse_start(None))
        }
    }

    fn remember(&self, root: &Utf8Path) {
        if let Some(manager) = self.config_manager {
            if let Err(e) = manager.remember_install_dir(root) {
                tracing::warn!("Could not save install directory: {:#}", e);
            }
        }
    }
}

/// Text of the final overwrite confirmation.
pub fn overwrite_prompt(destination: &CopyTarget) -> String {
    format!(
        "Overwrite {}-{}'s Keybindings, Macros, and SavedVariables?",
        destination.identity.character, destination.identity.server
    )
}

/// Human-readable listing of a plan for `--dry-run`.
pub fn plan_lines(plan: &CopyPlan) -> Vec<String> {
    let mut lines = Vec::with_capacity(plan.len() + plan.cache_files.len() + 2);
    for scope in &plan.skipped_scopes {
        lines.push(format!(
            "Skipping {scope}-level copying - source and destination are the same."
        ));
    }
    for entry in &plan.entries {
        lines.push(format!(
            "[{}] {} -> {}",
            entry.scope, entry.source, entry.destination
        ));
    }
    for cache in &plan.cache_files {
        lines.push(format!("[cache] remove {cache}"));
    }
    lines.push(format!(
        "{} account-level and {} character-level file(s) would be copied.",
        plan.entries_in(Scope::Account).count(),
        plan.entries_in(Scope::Character).count()
    ));
    lines
}

/// Final summary: a success line, or a warning line plus every failure.
pub fn summary_lines(report: &CopyReport) -> Vec<String> {
    match report.status() {
        CopyStatus::Clean => vec![format!(
            "Profile copying completed without issues! ({} file(s) copied)",
            report.copied_count()
        )],
        CopyStatus::Degraded => {
            let mut lines = vec![format!(
                "Profile copying completed with warnings: {} of {} file(s) not copied.",
                report.failure_count(),
                report.outcomes.len()
            )];
            lines.extend(report.failures().map(|(_, err)| format!("  - {err}")));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CopyPlanEntry, ProfileIdentity, VersionId};
    use crate::services::copy_executor::CopyOutcome;
    use crate::services::error::ProfileCopyError;
    use std::io;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(RunOutcome::Completed.exit_code(), 0);
        assert_eq!(RunOutcome::Declined.exit_code(), 1);
        assert_eq!(RunOutcome::CompletedWithWarnings.exit_code(), 2);
        assert_ne!(RunOutcome::Declined.exit_code(), FATAL_EXIT_CODE);
    }

    #[test]
    fn test_overwrite_prompt_names_destination() {
        let destination = CopyTarget::new(
            VersionId::Retail,
            ProfileIdentity::new("ACCT2", "Area52", "Zed"),
        );
        assert_eq!(
            overwrite_prompt(&destination),
            "Overwrite Zed-Area52's Keybindings, Macros, and SavedVariables?"
        );
    }

    #[test]
    fn test_degraded_summary_lists_each_failure() {
        let entry = CopyPlanEntry::new(
            Scope::Character,
            "/src/layout-local.txt".into(),
            "/dst/layout-local.txt".into(),
        );
        let report = CopyReport {
            outcomes: vec![
                CopyOutcome {
                    entry: entry.clone(),
                    result: Err(ProfileCopyError::FileCopyFailed {
                        source_path: entry.source.clone(),
                        destination_path: entry.destination.clone(),
                        source: io::Error::from(io::ErrorKind::NotFound),
                    }),
                },
                CopyOutcome {
                    entry,
                    result: Ok(4),
                },
            ],
            caches: Vec::new(),
        };

        let lines = summary_lines(&report);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1 of 2"));
        assert!(lines[1].contains("/src/layout-local.txt"));
    }

    #[test]
    fn test_plan_lines_mention_skipped_scope() {
        let plan = CopyPlan {
            entries: Vec::new(),
            skipped_scopes: vec![Scope::Account],
            cache_files: vec!["/dst/cache.md5".into()],
        };

        let lines = plan_lines(&plan);

        assert!(lines[0].starts_with("Skipping account-level copying"));
        assert!(lines.iter().any(|l| l == "[cache] remove /dst/cache.md5"));
    }
}
