//! wow-profile-copy - copy one character's client configuration onto another.
//!
//! # Execution Flow
//!
//! 1. Parse arguments, load `settings.yaml` from the config directory
//! 2. Initialize logging → `<cache dir>/wow-profile-copy/logs/wow-profile-copy.<date>`
//! 3. Find the install root (command line, remembered, guessed, or browsed)
//! 4. Pick source and destination (version → account → server → character)
//! 5. Confirm the overwrite, copy, remove `cache.md5` files, print a summary
//!
//! # Exit Codes
//!
//! - `0`: copied cleanly (or `--dry-run`)
//! - `1`: overwrite declined, nothing copied
//! - `2`: copied with per-file warnings
//! - `3`: stopped on an error

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::process::ExitCode;
use wow_profile_copy::ui::{DialoguerPrompter, FATAL_EXIT_CODE, RunController, RunOptions};
use wow_profile_copy::{APP_NAME, ConfigManager, StdFileSystem, VERSION};

#[derive(Parser, Debug)]
#[command(name = "wow-profile-copy", version, about = "Copy WoW keybindings, macros, and SavedVariables between characters")]
struct Args {
    /// WoW install directory (the folder containing _retail_, _classic_, ...)
    #[arg(long)]
    install_dir: Option<Utf8PathBuf>,

    /// Directory holding settings.yaml
    #[arg(long)]
    config_dir: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Show which files would be copied without touching anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config_manager = match load_config_manager(&args) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(FATAL_EXIT_CODE);
        }
    };
    let settings = match config_manager.load_user_config() {
        Ok(config) => config.settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(FATAL_EXIT_CODE);
        }
    };

    let log_dir = settings
        .log_dir
        .clone()
        .unwrap_or_else(wow_profile_copy::logging::default_log_dir);
    let guard = match wow_profile_copy::logging::setup_logging_with_console(
        &log_dir,
        APP_NAME,
        args.debug || settings.debug_mode,
        true,
    ) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let pause_on_exit = settings.pause_on_exit;
    let prompter = DialoguerPrompter::new(settings.select_page_size);
    let fs = StdFileSystem;
    let controller = RunController::new(&prompter, &fs, settings).with_config_manager(&config_manager);
    let options = RunOptions {
        install_dir: args.install_dir,
        dry_run: args.dry_run,
    };

    let code = match controller.run(&options) {
        Ok(outcome) => {
            tracing::info!("Run finished: {:?}", outcome);
            outcome.exit_code()
        }
        Err(e) => {
            if guard.is_some() {
                tracing::error!("{:#}", e);
            } else {
                eprintln!("Error: {e:#}");
            }
            FATAL_EXIT_CODE
        }
    };

    if pause_on_exit {
        // keep the console window open when launched by double-click
        println!("Press Enter to continue...");
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
    }

    drop(guard);
    ExitCode::from(code)
}

fn load_config_manager(args: &Args) -> Result<ConfigManager> {
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => ConfigManager::default_config_dir()?,
    };
    ConfigManager::new(config_dir)
}
