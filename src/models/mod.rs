//! Data models for wow-profile-copy.
//!
//! - [`VersionId`], [`ProfileIdentity`], [`CopyTarget`]: where a profile lives on disk
//! - [`CopyManifest`], [`CopyPlan`], [`CopyPlanEntry`]: what gets copied between two profiles
//! - [`UserConfig`]: user preferences loaded from `settings.yaml`
//!
//! The version table and the manifests are compile-time constants. Nothing in
//! here is mutated after construction.

pub mod config;
pub mod manifest;
pub mod profile;

pub use config::{CopySettings, UserConfig};
pub use manifest::{CopyManifest, CopyPlan, CopyPlanEntry, DEFAULT_MANIFEST, Scope};
pub use profile::{
    ACCOUNT_DIR, CopyTarget, ProfileIdentity, ProfileSet, SAVED_VARIABLES_DIR, VersionId, WTF_DIR,
};
