//! Default install locations per host platform.

use camino::{Utf8Path, Utf8PathBuf};

/// Where the client is usually installed on this platform.
///
/// On Linux this is the Bottles prefix created by the Battle.net installer
/// under the home directory. Returns `None` on other platforms, or when the
/// home directory is unknown or not UTF-8.
pub fn probable_install_location() -> Option<Utf8PathBuf> {
    if cfg!(target_os = "macos") {
        Some(Utf8PathBuf::from("/Applications/World of Warcraft"))
    } else if cfg!(windows) {
        Some(Utf8PathBuf::from(r"C:\Program Files (x86)\World of Warcraft"))
    } else if cfg!(target_os = "linux") {
        let home = dirs::home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home).ok()?;
        Some(bottles_install_location(&home))
    } else {
        None
    }
}

/// Install location inside the default Bottles "WoW" bottle.
pub fn bottles_install_location(home: &Utf8Path) -> Utf8PathBuf {
    home.join(".var/app/com.usebottles.bottles/data/bottles/bottles/WoW/drive_c/Program Files (x86)/World of Warcraft")
}

/// Root to start interactive browsing from.
///
/// `drive` is only used on Windows, where the first character of the user's
/// answer names the drive (`"d"` → `D:\`).
pub fn browse_start(drive: Option<&str>) -> Utf8PathBuf {
    match drive.and_then(|d| d.trim().chars().next()) {
        Some(letter) if cfg!(windows) => {
            Utf8PathBuf::from(format!("{}:\\", letter.to_ascii_uppercase()))
        }
        _ => Utf8PathBuf::from("/"),
    }
}
