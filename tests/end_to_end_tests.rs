//! End-to-end tests for a full interactive run
//!
//! A scripted prompter answers every question the way a user would, and the
//! run controller drives discovery, selection, confirmation, and copying
//! against a real directory tree.

mod common;

use anyhow::{Result, anyhow};
use common::{Install, read};
use std::cell::RefCell;
use std::collections::VecDeque;
use wow_profile_copy::models::UserConfig;
use wow_profile_copy::ui::{Prompter, RunController, RunOptions, RunOutcome};
use wow_profile_copy::{ConfigManager, CopyTarget, StdFileSystem, VersionId};

/// Answers prompts from a fixed script and records every prompt it saw.
struct ScriptedPrompter {
    picks: RefCell<VecDeque<&'static str>>,
    confirm_overwrite: bool,
    seen: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(picks: &[&'static str], confirm_overwrite: bool) -> Self {
        Self {
            picks: RefCell::new(picks.iter().copied().collect()),
            confirm_overwrite,
            seen: RefCell::new(Vec::new()),
        }
    }

    fn finished(&self) -> bool {
        self.picks.borrow().is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        self.seen.borrow_mut().push(prompt.to_string());
        let want = self
            .picks
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected prompt: {prompt}"))?;
        options
            .iter()
            .position(|o| o == want)
            .ok_or_else(|| anyhow!("{want} not offered for {prompt}: {options:?}"))
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        self.seen.borrow_mut().push(prompt.to_string());
        Ok(self.confirm_overwrite)
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Err(anyhow!("unexpected input prompt: {prompt}"))
    }
}

struct Fixture {
    install: Install,
    source: CopyTarget,
    destination: CopyTarget,
}

fn fixture() -> Fixture {
    let install = Install::new();
    let source = install.character(VersionId::Retail, "ACCT1", "Area52", "Bob");
    let destination = install.character(VersionId::Retail, "ACCT2", "Area52", "Bob");
    install.populate(&source, &["Details.lua", "WeakAuras.lua"]);
    install.prepare_destination(&destination);
    Fixture {
        install,
        source,
        destination,
    }
}

const PICKS: &[&str] = &[
    "Retail", "ACCT1", "Area52", "Bob", // source
    "Retail", "ACCT2", "Area52", "Bob", // destination
];

fn options_for(fixture: &Fixture, dry_run: bool) -> RunOptions {
    RunOptions {
        install_dir: Some(fixture.install.root.clone()),
        dry_run,
    }
}

#[test]
fn test_confirmed_run_copies_profile() {
    let fixture = fixture();
    let prompter = ScriptedPrompter::new(PICKS, true);
    let controller = RunController::new(&prompter, &StdFileSystem, Default::default());

    let outcome = controller.run(&options_for(&fixture, false)).unwrap();

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(outcome.exit_code(), 0);
    assert!(prompter.finished());

    let src = fixture.source.character_dir(&fixture.install.root);
    let dst = fixture.destination.character_dir(&fixture.install.root);
    for file in ["AddOns.txt", "layout-local.txt", "SavedVariables/Details.lua"] {
        assert_eq!(read(&src.join(file)), read(&dst.join(file)), "{file}");
    }
    let src = fixture.source.account_dir(&fixture.install.root);
    let dst = fixture.destination.account_dir(&fixture.install.root);
    for file in ["bindings-cache.wtf", "SavedVariables/WeakAuras.lua"] {
        assert_eq!(read(&src.join(file)), read(&dst.join(file)), "{file}");
    }

    let seen = prompter.seen.borrow();
    assert_eq!(
        seen.last().map(String::as_str),
        Some("Overwrite Bob-Area52's Keybindings, Macros, and SavedVariables?")
    );
    assert!(seen[0].starts_with("WoW Version to copy from"));
    assert!(seen[4].starts_with("WoW Version to copy to"));
}

#[test]
fn test_declined_run_changes_nothing() {
    let fixture = fixture();
    let prompter = ScriptedPrompter::new(PICKS, false);
    let controller = RunController::new(&prompter, &StdFileSystem, Default::default());

    let outcome = controller.run(&options_for(&fixture, false)).unwrap();

    assert_eq!(outcome, RunOutcome::Declined);
    assert_eq!(outcome.exit_code(), 1);
    let dst = fixture.destination.character_dir(&fixture.install.root);
    assert!(!dst.join("AddOns.txt").exists());
    assert!(!dst.join("SavedVariables/Details.lua").exists());
}

#[test]
fn test_dry_run_never_asks_to_overwrite() {
    let fixture = fixture();
    let prompter = ScriptedPrompter::new(PICKS, true);
    let controller = RunController::new(&prompter, &StdFileSystem, Default::default());

    let outcome = controller.run(&options_for(&fixture, true)).unwrap();

    assert_eq!(outcome, RunOutcome::DryRun);
    assert!(prompter.seen.borrow().iter().all(|p| !p.starts_with("Overwrite")));
    let dst = fixture.destination.account_dir(&fixture.install.root);
    assert!(!dst.join("bindings-cache.wtf").exists());
}

#[test]
fn test_missing_source_file_finishes_with_warnings() {
    let fixture = fixture();
    std::fs::remove_file(
        fixture
            .source
            .character_dir(&fixture.install.root)
            .join("AddOns.txt"),
    )
    .unwrap();
    let prompter = ScriptedPrompter::new(PICKS, true);
    let controller = RunController::new(&prompter, &StdFileSystem, Default::default());

    let outcome = controller.run(&options_for(&fixture, false)).unwrap();

    assert_eq!(outcome, RunOutcome::CompletedWithWarnings);
    assert_eq!(outcome.exit_code(), 2);
    let dst = fixture.destination.character_dir(&fixture.install.root);
    assert!(dst.join("layout-local.txt").exists());
}

#[test]
fn test_version_without_profiles_is_fatal() {
    let fixture = fixture();
    std::fs::create_dir_all(VersionId::ClassicEra.account_root(&fixture.install.root)).unwrap();
    let prompter = ScriptedPrompter::new(&["Classic Era"], true);
    let controller = RunController::new(&prompter, &StdFileSystem, Default::default());

    let err = controller.run(&options_for(&fixture, false)).unwrap_err();

    assert!(err.to_string().contains("No valid WTF configurations found"));
}

#[test]
fn test_install_dir_is_remembered() {
    let fixture = fixture();
    let config_dir = tempfile::TempDir::new().unwrap();
    let manager = ConfigManager::new(
        camino::Utf8PathBuf::try_from(config_dir.path().to_path_buf()).unwrap(),
    )
    .unwrap();
    let prompter = ScriptedPrompter::new(PICKS, false);
    let controller =
        RunController::new(&prompter, &StdFileSystem, Default::default()).with_config_manager(&manager);

    controller.run(&options_for(&fixture, false)).unwrap();

    let saved: UserConfig = manager.load_user_config().unwrap();
    assert_eq!(saved.settings.install_dir, Some(fixture.install.root.clone()));
}
