//! Services module - profile discovery and copy logic.
//!
//! Everything here is free of prompting and console output, and reaches the
//! disk only through the [`FileSystem`] trait.
//!
//! # Components
//!
//! - [`discover_versions`] / [`is_install_root`]: which version folders an install root has
//! - [`enumerate_profiles`]: every (account, server, character) under one version
//! - [`CopyPlanResolver`]: which files move from one profile to another
//! - [`CopyExecutor`]: performs a plan, collecting per-file failures, then removes
//!   the destination `cache.md5` files
//! - [`probable_install_location`]: where the client usually lives on this host
//!
//! # Flow
//!
//! ```ignore
//! let fs = StdFileSystem;
//! let versions = require_versions(&fs, &root)?;
//! let profiles = enumerate_profiles(&fs, &root, versions[0])?;
//! // ... pick source and destination from `profiles` ...
//! let plan = CopyPlanResolver::default().resolve(&fs, &root, &source, &destination)?;
//! let report = CopyExecutor::new(&fs).execute(plan)?;
//! ```

pub mod copy_executor;
pub mod copy_plan;
pub mod error;
pub mod fs;
pub mod install_location;
pub mod profile_enumerator;
pub mod version_discovery;

pub use copy_executor::{CacheRemoval, CopyExecutor, CopyOutcome, CopyReport, CopyStatus};
pub use copy_plan::CopyPlanResolver;
pub use error::ProfileCopyError;
pub use fs::{DirEntryInfo, FileSystem, StdFileSystem};
pub use install_location::probable_install_location;
pub use profile_enumerator::enumerate_profiles;
pub use version_discovery::{discover_versions, is_install_root, require_versions};
