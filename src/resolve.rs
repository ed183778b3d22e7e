//! Resolution pipeline: locate, then probe.

use crate::detection::detect_java_home;
use crate::locate::{AutoDetect, Locator};
use crate::{
    probe_version, ConfigSource, Environment, FailureKind, NoSettings, ResolutionFailure,
    ResolveOptions, ResolvedRequirement, SystemEnvironment,
};
use futures::future::{select, Either};
use futures::FutureExt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::pin;

/// Resolve the Java requirement with default inputs.
///
/// Reads `JDK_HOME` then `JAVA_HOME` from the process environment, falls back
/// to auto-detection, and requires Java 8 or newer. There are no host
/// settings and no timeout; use [`Resolver`] to supply either.
///
/// # Example
///
/// ```rust,no_run
/// use jdk_requirements::resolve;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match resolve().await {
///         Ok(resolved) => println!(
///             "Java {} at {}",
///             resolved.major_version,
///             resolved.java_home().display()
///         ),
///         Err(failure) => eprintln!("{} ({})", failure.message, failure.open_url),
///     }
/// }
/// ```
pub async fn resolve() -> Result<ResolvedRequirement, ResolutionFailure> {
    Resolver::new().resolve().await
}

/// Configurable resolution pipeline.
///
/// Runs the locator to completion, then the version probe. Nothing is cached:
/// every call re-reads its inputs.
///
/// # Example
///
/// ```rust,no_run
/// use jdk_requirements::{ResolveOptions, Resolver};
/// use std::collections::HashMap;
/// use std::time::Duration;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let mut settings = HashMap::new();
///     settings.insert("java.home".to_string(), "~/jdks/17".to_string());
///
///     let resolver = Resolver::new()
///         .with_config(settings)
///         .with_options(ResolveOptions {
///             minimum_version: 11,
///             timeout: Some(Duration::from_secs(10)),
///         });
///
///     let result = resolver.resolve().await;
///     println!("{:?}", result);
/// }
/// ```
pub struct Resolver {
    config: Box<dyn ConfigSource>,
    env: Box<dyn Environment>,
    auto_detect: AutoDetect,
    options: ResolveOptions,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            config: Box::new(NoSettings),
            env: Box::new(SystemEnvironment),
            auto_detect: Box::new(|| detect_java_home().boxed()),
            options: ResolveOptions::default(),
        }
    }
}

impl Resolver {
    /// A resolver over the process environment with no host settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for the `java.home` setting.
    pub fn with_config(mut self, config: impl ConfigSource + 'static) -> Self {
        self.config = Box::new(config);
        self
    }

    /// Read `JDK_HOME` and `JAVA_HOME` from `env` instead of the process.
    pub fn with_environment(mut self, env: impl Environment + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Replace the platform-native auto-detection routine.
    pub fn with_auto_detect<F, Fut>(mut self, detect: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<PathBuf>> + Send + 'static,
    {
        self.auto_detect = Box::new(move || detect().boxed());
        self
    }

    /// Set the minimum version and timeout.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// The locator stage on its own.
    pub fn locator(&self) -> Locator<'_> {
        Locator::new(self.config.as_ref(), self.env.as_ref(), &self.auto_detect)
    }

    /// Locate and probe.
    ///
    /// The probe never runs if location fails.
    pub async fn resolve(&self) -> Result<ResolvedRequirement, ResolutionFailure> {
        let home = self.locator().locate().await?;
        let major_version = probe_version(&home, &self.options).await?;
        Ok(ResolvedRequirement {
            home,
            major_version,
        })
    }

    /// Like [`Resolver::resolve`], abandoned as soon as `cancel` completes.
    ///
    /// A running `java -version` child is killed on cancellation.
    ///
    /// # Errors
    ///
    /// `Cancelled` if `cancel` finishes first, otherwise whatever
    /// [`Resolver::resolve`] returns.
    pub async fn resolve_until<C>(&self, cancel: C) -> Result<ResolvedRequirement, ResolutionFailure>
    where
        C: Future<Output = ()>,
    {
        let work = pin!(self.resolve());
        let cancel = pin!(cancel);

        match select(work, cancel).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FailureKind::Cancelled.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CandidateSource;
    use std::collections::HashMap;

    fn empty_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_default_options() {
        let resolver = Resolver::new();
        assert_eq!(resolver.options().minimum_version, 8);
        assert!(resolver.options().timeout.is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_nothing_configured_or_detected() {
        let resolver = Resolver::new()
            .with_environment(empty_env())
            .with_auto_detect(|| async { None });

        let err = resolver.resolve().await.unwrap_err();
        assert_eq!(err.kind, FailureKind::MissingRuntime);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_invalid_override_reported_before_probe() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = HashMap::new();
        settings.insert(
            "java.home".to_string(),
            dir.path().join("missing").to_string_lossy().into_owned(),
        );

        let resolver = Resolver::new()
            .with_config(settings)
            .with_environment(empty_env())
            .with_auto_detect(|| async { None });

        let err = resolver.resolve().await.unwrap_err();
        assert_eq!(
            err.kind,
            FailureKind::MissingFolder {
                origin: CandidateSource::ExplicitConfig
            }
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_cancel_before_completion() {
        let resolver = Resolver::new()
            .with_environment(empty_env())
            .with_auto_detect(|| futures::future::pending());

        let err = resolver
            .resolve_until(futures::future::ready(()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::Cancelled);
        assert_eq!(err.message, "Java runtime resolution was cancelled");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_completion_wins_over_pending_cancel() {
        let resolver = Resolver::new()
            .with_environment(empty_env())
            .with_auto_detect(|| async { None });

        let err = resolver
            .resolve_until(futures::future::pending())
            .await
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::MissingRuntime);
    }
}
