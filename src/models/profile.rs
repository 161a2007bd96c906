use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Directory under each version folder that holds all per-user configuration.
pub const WTF_DIR: &str = "WTF";

/// Directory under [`WTF_DIR`] that holds one folder per account.
pub const ACCOUNT_DIR: &str = "Account";

/// Reserved folder name for shared saved variables.
///
/// Appears next to account folders and next to server folders, and is never
/// an account or a server itself. Character folders are not checked against it.
pub const SAVED_VARIABLES_DIR: &str = "SavedVariables";

/// Recognized client version folders found directly under an install root.
///
/// The set is closed: anything else in the install root is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionId {
    Retail,
    RetailPtr,
    RetailExperimentalPtr,
    RetailBeta,
    Classic,
    ClassicPtr,
    ClassicBeta,
    ClassicEra,
    ClassicEraPtr,
}

impl VersionId {
    /// Every recognized version, in display order.
    pub const ALL: [VersionId; 9] = [
        VersionId::Retail,
        VersionId::RetailPtr,
        VersionId::RetailExperimentalPtr,
        VersionId::RetailBeta,
        VersionId::Classic,
        VersionId::ClassicPtr,
        VersionId::ClassicBeta,
        VersionId::ClassicEra,
        VersionId::ClassicEraPtr,
    ];

    /// On-disk folder name, e.g. `_retail_`.
    pub fn folder_name(self) -> &'static str {
        match self {
            VersionId::Retail => "_retail_",
            VersionId::RetailPtr => "_ptr_",
            VersionId::RetailExperimentalPtr => "_xptr_",
            VersionId::RetailBeta => "_beta_",
            VersionId::Classic => "_classic_",
            VersionId::ClassicPtr => "_classic_ptr_",
            VersionId::ClassicBeta => "_classic_beta_",
            VersionId::ClassicEra => "_classic_era_",
            VersionId::ClassicEraPtr => "_classic_era_ptr_",
        }
    }

    /// Human-readable label shown in prompts and summaries.
    pub fn label(self) -> &'static str {
        match self {
            VersionId::Retail => "Retail",
            VersionId::RetailPtr => "Retail PTR",
            VersionId::RetailExperimentalPtr => "Retail Experimental PTR",
            VersionId::RetailBeta => "Retail Beta",
            VersionId::Classic => "Classic",
            VersionId::ClassicPtr => "Classic PTR",
            VersionId::ClassicBeta => "Classic Beta",
            VersionId::ClassicEra => "Classic Era",
            VersionId::ClassicEraPtr => "Classic Era PTR",
        }
    }

    /// Look up a version by its exact folder name.
    pub fn from_folder_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.folder_name() == name)
    }

    /// `<root>/<version>/WTF/Account`
    pub fn account_root(self, install_root: &Utf8Path) -> Utf8PathBuf {
        install_root
            .join(self.folder_name())
            .join(WTF_DIR)
            .join(ACCOUNT_DIR)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.folder_name())
    }
}

/// One (account, server, character) configuration namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileIdentity {
    pub account: String,
    pub server: String,
    pub character: String,
}

impl ProfileIdentity {
    pub fn new(
        account: impl Into<String>,
        server: impl Into<String>,
        character: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            server: server.into(),
            character: character.into(),
        }
    }
}

/// All profiles discovered under one version, in directory-listing order.
pub type ProfileSet = Vec<ProfileIdentity>;

/// A fully resolved copy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    pub version: VersionId,
    pub identity: ProfileIdentity,
}

impl CopyTarget {
    pub fn new(version: VersionId, identity: ProfileIdentity) -> Self {
        Self { version, identity }
    }

    /// `<root>/<version>/WTF/Account/<account>`
    pub fn account_dir(&self, install_root: &Utf8Path) -> Utf8PathBuf {
        self.version
            .account_root(install_root)
            .join(&self.identity.account)
    }

    /// `<root>/<version>/WTF/Account/<account>/<server>/<character>`
    pub fn character_dir(&self, install_root: &Utf8Path) -> Utf8PathBuf {
        self.account_dir(install_root)
            .join(&self.identity.server)
            .join(&self.identity.character)
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ Version: {}, Account: {}, Server: {}, Character: {} }}",
            self.version.label(),
            self.identity.account,
            self.identity.server,
            self.identity.character
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_names_round_trip_through_lookup() {
        for version in VersionId::ALL {
            assert_eq!(VersionId::from_folder_name(version.folder_name()), Some(version));
        }
    }

    #[test]
    fn test_unknown_folder_is_not_a_version() {
        assert_eq!(VersionId::from_folder_name("_retail"), None);
        assert_eq!(VersionId::from_folder_name("Interface"), None);
        assert_eq!(VersionId::from_folder_name("_RETAIL_"), None);
    }

    #[test]
    fn test_target_paths() {
        let root = Utf8Path::new("/games/World of Warcraft");
        let target = CopyTarget::new(
            VersionId::Classic,
            ProfileIdentity::new("ACCT1", "Faerlina", "Bob"),
        );

        assert_eq!(
            target.account_dir(root),
            Utf8PathBuf::from("/games/World of Warcraft/_classic_/WTF/Account/ACCT1")
        );
        assert_eq!(
            target.character_dir(root),
            Utf8PathBuf::from("/games/World of Warcraft/_classic_/WTF/Account/ACCT1/Faerlina/Bob")
        );
    }

    #[test]
    fn test_target_display_uses_label() {
        let target = CopyTarget::new(VersionId::Retail, ProfileIdentity::new("A", "S", "C"));
        assert_eq!(
            target.to_string(),
            "{ Version: Retail, Account: A, Server: S, Character: C }"
        );
    }
}
