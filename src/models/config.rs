use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// User configuration from settings.yaml
///
/// Holds user preferences only. Version folders and copy manifests are fixed
/// by the tool and never read from here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Profile_Copy_Settings", default)]
    pub settings: CopySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopySettings {
    /// Last confirmed install root.
    #[serde(rename = "Install Directory", default)]
    pub install_dir: Option<Utf8PathBuf>,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    #[serde(rename = "Log Directory", default)]
    pub log_dir: Option<Utf8PathBuf>,

    #[serde(rename = "Select Page Size", default = "default_select_page_size")]
    pub select_page_size: usize,

    #[serde(rename = "Pause On Exit", default = "default_pause_on_exit")]
    pub pause_on_exit: bool,
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            install_dir: None,
            debug_mode: false,
            log_dir: None,
            select_page_size: default_select_page_size(),
            pause_on_exit: default_pause_on_exit(),
        }
    }
}

fn default_select_page_size() -> usize {
    15
}

fn default_pause_on_exit() -> bool {
    cfg!(windows)
}
