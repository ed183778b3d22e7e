//! Candidate sources for a Java home directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Where a candidate Java home directory came from.
///
/// Sources are tried in declaration order and the first one that yields a
/// non-empty value wins. The provenance label is only used to tell the user
/// which setting to fix when validation fails.
///
/// # Example
///
/// ```rust
/// use jdk_requirements::CandidateSource;
///
/// // Sources in priority order
/// for source in CandidateSource::all() {
///     println!("{:?}: {}", source.key(), source.label());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum CandidateSource {
    /// The `java.home` setting in the host configuration store.
    ExplicitConfig,
    /// The `JDK_HOME` environment variable.
    EnvPrimary,
    /// The `JAVA_HOME` environment variable.
    EnvSecondary,
    /// The platform-native detection routine.
    AutoDetected,
}

impl CandidateSource {
    /// The configuration key or environment variable name read for this source.
    ///
    /// `None` for [`CandidateSource::AutoDetected`], which has no user-set value.
    ///
    /// ```rust
    /// use jdk_requirements::CandidateSource;
    ///
    /// assert_eq!(CandidateSource::ExplicitConfig.key(), Some("java.home"));
    /// assert_eq!(CandidateSource::EnvPrimary.key(), Some("JDK_HOME"));
    /// assert_eq!(CandidateSource::AutoDetected.key(), None);
    /// ```
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::ExplicitConfig => Some("java.home"),
            Self::EnvPrimary => Some("JDK_HOME"),
            Self::EnvSecondary => Some("JAVA_HOME"),
            Self::AutoDetected => None,
        }
    }

    /// Human-readable provenance used in failure messages.
    ///
    /// ```rust
    /// use jdk_requirements::CandidateSource;
    ///
    /// assert_eq!(
    ///     CandidateSource::EnvSecondary.label(),
    ///     "The JAVA_HOME environment variable"
    /// );
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExplicitConfig => "The java.home variable defined in the settings",
            Self::EnvPrimary => "The JDK_HOME environment variable",
            Self::EnvSecondary => "The JAVA_HOME environment variable",
            Self::AutoDetected => "The auto-detected Java installation",
        }
    }

    /// Whether the value came from something the user set explicitly.
    ///
    /// User-set candidates are validated before use; auto-detected homes are not.
    pub fn is_user_set(&self) -> bool {
        !matches!(self, Self::AutoDetected)
    }

    /// Iterator over all sources in priority order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
