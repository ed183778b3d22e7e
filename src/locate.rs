//! Java home location.

use crate::detection::{has_compiler, normalize_home};
use crate::{CandidateSource, ConfigSource, Environment, FailureKind, ResolutionFailure, RuntimeHome};
use futures::future::BoxFuture;
use std::path::PathBuf;
use tracing::debug;

/// Auto-detection routine used when no source is set.
pub type AutoDetect = Box<dyn Fn() -> BoxFuture<'static, Option<PathBuf>> + Send + Sync>;

/// Finds a candidate Java home and validates it.
///
/// Sources are tried in [`CandidateSource::all`] order; the first non-empty
/// value wins and later sources are never consulted, even if validation of
/// the winner fails.
pub struct Locator<'a> {
    config: &'a dyn ConfigSource,
    env: &'a dyn Environment,
    auto_detect: &'a AutoDetect,
}

impl<'a> Locator<'a> {
    /// Create a locator over the given inputs.
    pub fn new(
        config: &'a dyn ConfigSource,
        env: &'a dyn Environment,
        auto_detect: &'a AutoDetect,
    ) -> Self {
        Self {
            config,
            env,
            auto_detect,
        }
    }

    /// Determine the Java home.
    ///
    /// # Errors
    ///
    /// - `MissingRuntime` if no source is set and auto-detection finds nothing
    /// - `MissingFolder` if a user-set path does not exist
    /// - `NotADevelopmentKit` if a user-set path has no `bin/javac`
    pub async fn locate(&self) -> Result<RuntimeHome, ResolutionFailure> {
        for source in CandidateSource::all() {
            match source.key() {
                Some(key) => {
                    if let Some(raw) = self.lookup(source, key) {
                        debug!("Using {} = {:?}", key, raw);
                        return validate(source, &raw);
                    }
                }
                None => {
                    if let Some(path) = (self.auto_detect)().await {
                        debug!("Auto-detected Java home at {:?}", path);
                        return Ok(RuntimeHome::new(path, source));
                    }
                }
            }
        }

        Err(ResolutionFailure::new(FailureKind::MissingRuntime))
    }

    fn lookup(&self, source: CandidateSource, key: &str) -> Option<String> {
        let value = match source {
            CandidateSource::ExplicitConfig => self.config.setting(key),
            _ => self.env.var(key),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Normalize a user-set candidate and check it looks like a JDK.
///
/// Existence is checked before the compiler so the two cases get distinct
/// messages.
fn validate(source: CandidateSource, raw: &str) -> Result<RuntimeHome, ResolutionFailure> {
    let path = normalize_home(raw);
    debug!("Normalized {:?} to {:?}", raw, path);

    if !path.exists() {
        return Err(FailureKind::MissingFolder { origin: source }.into());
    }
    if !has_compiler(&path) {
        return Err(FailureKind::NotADevelopmentKit { origin: source }.into());
    }

    Ok(RuntimeHome::new(path, source))
}
