// wow-profile-copy - Copy WoW keybindings, macros, and SavedVariables between characters
//
// This is the library crate containing profile discovery and copy logic.
// The binary crate (main.rs) provides the interactive terminal entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{CopyPlan, CopyTarget, ProfileIdentity, UserConfig, VersionId};
pub use services::{CopyExecutor, CopyPlanResolver, ProfileCopyError, StdFileSystem};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
