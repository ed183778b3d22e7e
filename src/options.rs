//! Resolution options.
//!
//! This module provides the [`ResolveOptions`] struct for configuring the
//! minimum-version gate and the version check timeout.

use std::time::Duration;

/// Minimum Java major version accepted by default.
pub const DEFAULT_MINIMUM_VERSION: u32 = 8;

/// Configuration options for Java runtime resolution.
///
/// # Default Behavior
///
/// Java 8 is the default minimum. There is no timeout by default: the version
/// check waits for `java -version` to exit. Callers embedding resolution in a
/// responsive UI should set one, or use
/// [`Resolver::resolve_until`](crate::Resolver::resolve_until).
///
/// # Example
///
/// ```rust
/// use jdk_requirements::ResolveOptions;
/// use std::time::Duration;
///
/// // Require Java 11 and give up after 10 seconds
/// let opts = ResolveOptions {
///     minimum_version: 11,
///     timeout: Some(Duration::from_secs(10)),
/// };
///
/// // Only bound the version check
/// let opts = ResolveOptions {
///     timeout: Some(Duration::from_secs(5)),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Lowest acceptable Java major version.
    ///
    /// Default: 8
    pub minimum_version: u32,

    /// Upper bound on the `java -version` subprocess.
    ///
    /// Default: `None` (wait until the process exits)
    pub timeout: Option<Duration>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            minimum_version: DEFAULT_MINIMUM_VERSION,
            timeout: None,
        }
    }
}
