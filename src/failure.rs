//! Failure payloads for Java runtime resolution.
//!
//! Every failure in the pipeline is terminal and surfaces as a
//! [`ResolutionFailure`]: a cause message plus the remediation fields a
//! presentation layer needs to show a notification with a download button.

use crate::CandidateSource;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Remediation label attached to every failure.
pub const REMEDIATION_LABEL: &str = "Get the Java Development Kit";

const OPENJDK_DOWNLOAD_URL: &str =
    "https://developers.redhat.com/products/openjdk/download/?sc_cid=701f2000000RWTnAAO";
const MACOS_DOWNLOAD_URL: &str =
    "http://www.oracle.com/technetwork/java/javase/downloads/index.html";

/// Download page for a JDK on the current platform.
///
/// macOS points at the Oracle downloads page; every other platform gets the
/// OpenJDK download page.
pub fn download_url() -> &'static str {
    if cfg!(target_os = "macos") {
        MACOS_DOWNLOAD_URL
    } else {
        OPENJDK_DOWNLOAD_URL
    }
}

/// Why a resolution failed.
///
/// The `Display` output of each variant is the cause message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FailureKind {
    /// No source produced a candidate and auto-detection found nothing.
    #[error("Java runtime could not be located")]
    MissingRuntime,

    /// A user-set candidate points to a path that does not exist.
    #[error("{origin} points to a missing folder")]
    MissingFolder {
        /// Source that supplied the path.
        origin: CandidateSource,
    },

    /// A user-set candidate exists but has no compiler under `bin/`.
    #[error("{origin} does not point to a Java Development Kit.")]
    NotADevelopmentKit {
        /// Source that supplied the path.
        origin: CandidateSource,
    },

    /// The runtime reports a major version below the minimum.
    ///
    /// `found` is 0 when the version banner could not be parsed.
    #[error("Java {required} or more recent is required to run. Please download and install a recent JDK")]
    VersionTooLow {
        /// Parsed major version.
        found: u32,
        /// Configured minimum major version.
        required: u32,
    },

    /// The version check did not finish within the configured timeout.
    #[error("Timed out after {after:?} waiting for the Java version check")]
    TimedOut {
        /// The timeout that elapsed.
        after: Duration,
    },

    /// The caller cancelled the resolution.
    #[error("Java runtime resolution was cancelled")]
    Cancelled,
}

/// Structured failure handed to the presentation layer.
///
/// All failures share this shape, so a caller only has to display
/// `message` and optionally offer `open_url` under `label`. Serializes with
/// camelCase field names; `kind` is kept for programmatic matching only.
///
/// # Example
///
/// ```rust
/// use jdk_requirements::{FailureKind, ResolutionFailure};
///
/// let failure = ResolutionFailure::new(FailureKind::MissingRuntime);
/// assert_eq!(failure.message, "Java runtime could not be located");
/// assert_eq!(failure.label, "Get the Java Development Kit");
/// assert!(!failure.replace_close);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ResolutionFailure {
    /// Typed cause for programmatic handling.
    #[serde(skip)]
    pub kind: FailureKind,
    /// Cause message for display.
    pub message: String,
    /// Label for the remediation action.
    pub label: String,
    /// Platform-appropriate JDK download page.
    pub open_url: String,
    /// Whether the notification should replace an existing one rather than
    /// augment it.
    pub replace_close: bool,
}

impl ResolutionFailure {
    /// Build the payload for a failure cause.
    pub fn new(kind: FailureKind) -> Self {
        Self {
            message: kind.to_string(),
            label: REMEDIATION_LABEL.to_string(),
            open_url: download_url().to_string(),
            replace_close: false,
            kind,
        }
    }
}

impl From<FailureKind> for ResolutionFailure {
    fn from(kind: FailureKind) -> Self {
        Self::new(kind)
    }
}
