//! Shared fixtures: synthetic install trees on a temp directory.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;
use wow_profile_copy::models::DEFAULT_MANIFEST;
use wow_profile_copy::{CopyTarget, ProfileIdentity, VersionId};

pub struct Install {
    _temp_dir: TempDir,
    pub root: Utf8PathBuf,
}

impl Install {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().join("World of Warcraft")).unwrap();
        fs::create_dir_all(&root).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Create an empty character directory (and its parents).
    pub fn character(&self, version: VersionId, account: &str, server: &str, character: &str) -> CopyTarget {
        let target = CopyTarget::new(version, ProfileIdentity::new(account, server, character));
        fs::create_dir_all(target.character_dir(&self.root)).unwrap();
        target
    }

    /// Fill a target with every manifest file plus `lua` saved variables and a stray text file.
    pub fn populate(&self, target: &CopyTarget, lua: &[&str]) {
        let account_dir = target.account_dir(&self.root);
        let character_dir = target.character_dir(&self.root);

        for dir in [&account_dir, &character_dir] {
            let sv = dir.join("SavedVariables");
            fs::create_dir_all(&sv).unwrap();
            for name in lua {
                write(&sv.join(name), &format!("{name} in {dir}"));
            }
            write(&sv.join("notes.txt"), "not a saved variable");
        }
        for file in DEFAULT_MANIFEST.account_files {
            write(&account_dir.join(file), &format!("account {file} of {}", target.identity.account));
        }
        for file in DEFAULT_MANIFEST.character_files {
            write(&character_dir.join(file), &format!("character {file} of {}", target.identity.character));
        }
    }

    /// Give a target empty SavedVariables directories so copies have somewhere to land.
    pub fn prepare_destination(&self, target: &CopyTarget) {
        fs::create_dir_all(target.account_dir(&self.root).join("SavedVariables")).unwrap();
        fs::create_dir_all(target.character_dir(&self.root).join("SavedVariables")).unwrap();
    }
}

pub fn write(path: &Utf8Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

pub fn read(path: &Utf8Path) -> Vec<u8> {
    fs::read(path).unwrap()
}
