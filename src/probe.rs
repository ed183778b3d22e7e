//! Version probing of a located Java home.

use crate::detection::{parse_major_version, read_version_banner};
use crate::{FailureKind, ResolutionFailure, ResolveOptions, RuntimeHome};
use tracing::debug;

/// Run `<home>/bin/java -version` and gate on the major version.
///
/// The banner is parsed regardless of the exit status; anything unparseable
/// counts as version 0 and therefore fails the gate.
///
/// # Errors
///
/// - `VersionTooLow` if the parsed major version is below
///   `options.minimum_version`
/// - `TimedOut` if `options.timeout` elapses before the launcher exits
///
/// # Example
///
/// ```rust,no_run
/// use jdk_requirements::{probe_version, Resolver, ResolveOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let resolver = Resolver::new();
///     let home = resolver.locator().locate().await.unwrap();
///     let major = probe_version(&home, &ResolveOptions::default()).await.unwrap();
///     println!("Java {} at {}", major, home.path().display());
/// }
/// ```
pub async fn probe_version(
    home: &RuntimeHome,
    options: &ResolveOptions,
) -> Result<u32, ResolutionFailure> {
    let banner = read_version_banner(&home.java_executable(), options.timeout).await?;
    let found = parse_major_version(&banner);
    debug!("Java at {:?} reports major version {}", home.path(), found);

    if found < options.minimum_version {
        return Err(FailureKind::VersionTooLow {
            found,
            required: options.minimum_version,
        }
        .into());
    }

    Ok(found)
}
