//! Validated Java home and the resolution result.

use crate::detection::{compiler_file_name, launcher_file_name};
use crate::CandidateSource;
use std::path::{Path, PathBuf};

/// A normalized Java home directory.
///
/// The path has had `~` expanded and symbolic links resolved. Instances are
/// only produced by the locator, so a user-set home has already been checked
/// to exist and to contain `bin/javac`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHome {
    path: PathBuf,
    source: CandidateSource,
}

impl RuntimeHome {
    pub(crate) fn new(path: PathBuf, source: CandidateSource) -> Self {
        Self { path, source }
    }

    /// The home directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Which source supplied this home.
    pub fn source(&self) -> CandidateSource {
        self.source
    }

    /// `<home>/bin/java`, with the platform executable suffix.
    pub fn java_executable(&self) -> PathBuf {
        self.path.join("bin").join(launcher_file_name())
    }

    /// `<home>/bin/javac`, with the platform executable suffix.
    pub fn compiler_executable(&self) -> PathBuf {
        self.path.join("bin").join(compiler_file_name())
    }
}

/// A Java home that passed every check, with its major version.
///
/// `major_version` is always at least the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequirement {
    /// The validated Java home.
    pub home: RuntimeHome,
    /// Major version reported by `java -version` (8, 11, 17, ...).
    pub major_version: u32,
}

impl ResolvedRequirement {
    /// Shorthand for `self.home.path()`.
    pub fn java_home(&self) -> &Path {
        self.home.path()
    }
}
