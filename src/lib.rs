//! # jdk-requirements
//!
//! Locate and validate a Java Development Kit before starting a tool that
//! needs one.
//!
//! Resolution runs two stages in sequence:
//!
//! 1. **Locate**: take the first non-empty value from the `java.home`
//!    setting, `JDK_HOME`, or `JAVA_HOME`, falling back to platform-native
//!    detection. User-set paths must exist and contain `bin/javac`.
//! 2. **Probe**: run `<home>/bin/java -version`, parse the major version from
//!    the banner and require at least Java 8.
//!
//! Every failure is a [`ResolutionFailure`] carrying a cause message, a
//! remediation label and a platform-appropriate JDK download URL, ready to
//! hand to a notification layer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jdk_requirements::{resolve, parse_major_version};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     match resolve().await {
//!         Ok(resolved) => {
//!             println!("Java {} at {:?}", resolved.major_version, resolved.java_home());
//!         }
//!         Err(failure) => {
//!             eprintln!("{}", failure.message);
//!             eprintln!("{}: {}", failure.label, failure.open_url);
//!         }
//!     }
//!
//!     assert_eq!(parse_major_version(r#"java version "1.8.0_202""#), 8);
//! }
//! ```

mod config;
mod detection;
mod failure;
mod locate;
mod options;
mod probe;
mod resolve;
mod runtime;
mod source;

pub use config::{ConfigSource, Environment, NoSettings, SystemEnvironment};
pub use detection::parse_major_version;
pub use failure::{download_url, FailureKind, ResolutionFailure, REMEDIATION_LABEL};
pub use locate::{AutoDetect, Locator};
pub use options::{ResolveOptions, DEFAULT_MINIMUM_VERSION};
pub use probe::probe_version;
pub use resolve::{resolve, Resolver};
pub use runtime::{ResolvedRequirement, RuntimeHome};
pub use source::CandidateSource;
