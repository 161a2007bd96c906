pub mod controller;
pub mod prompt;
pub mod selection;

pub use controller::{FATAL_EXIT_CODE, RunController, RunOptions, RunOutcome};
pub use prompt::{DialoguerPrompter, Prompter};
pub use selection::{Endpoint, browse_for_install_root, confirm_or_browse, select_copy_target};
