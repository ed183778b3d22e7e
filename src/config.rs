//! Read-only inputs to the locator: host settings and environment variables.

use std::collections::HashMap;

/// Key-value lookup into the host application's settings.
///
/// A missing key is a normal state, not an error.
pub trait ConfigSource: Send + Sync {
    /// Look up a setting by key.
    fn setting(&self, key: &str) -> Option<String>;
}

/// A configuration source with no settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettings;

impl ConfigSource for NoSettings {
    fn setting(&self, _key: &str) -> Option<String> {
        None
    }
}

impl ConfigSource for HashMap<String, String> {
    fn setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Environment variable lookup.
pub trait Environment: Send + Sync {
    /// Read a variable. Unset and non-unicode values are both `None`.
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
