//! Installation key resolution
//!
//! Registries may gate a version's dependency metadata behind the
//! package's installation secret. Callers supply a key for the root
//! request, optionally reuse it for the whole chain, and may override it
//! per package.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Installation key configuration for one resolution run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallationKeys {
    /// Key supplied for the root package
    pub root_key: Option<String>,
    /// Reuse the root key for dependency frames (depth > 0)
    pub use_root_key_for_dependencies: bool,
    /// Per-package overrides; these win at any depth
    pub package_overrides: HashMap<String, String>,
}

impl InstallationKeys {
    /// Create an empty configuration (no keys anywhere)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root key
    #[must_use]
    pub fn with_root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = Some(key.into());
        self
    }

    /// Reuse the root key for every dependency frame
    #[must_use]
    pub fn use_for_dependencies(mut self, enabled: bool) -> Self {
        self.use_root_key_for_dependencies = enabled;
        self
    }

    /// Add a per-package override
    #[must_use]
    pub fn with_override(mut self, package: impl Into<String>, key: impl Into<String>) -> Self {
        self.package_overrides.insert(package.into(), key.into());
        self
    }

    /// Key for `(package, depth)`.
    ///
    /// Precedence: per-package override, then the root key at depth 0,
    /// then the root key at depth > 0 only when propagation is enabled.
    #[must_use]
    pub fn key_for(&self, package: &str, depth: usize) -> Option<&str> {
        if let Some(key) = self.package_overrides.get(package) {
            return Some(key);
        }
        if depth == 0 || self.use_root_key_for_dependencies {
            return self.root_key.as_deref();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> InstallationKeys {
        InstallationKeys::new()
            .with_root_key("p1")
            .use_for_dependencies(false)
            .with_override("lib-d", "p2")
    }

    #[test]
    fn test_override_wins_at_any_depth() {
        let keys = keys();
        assert_eq!(keys.key_for("lib-d", 0), Some("p2"));
        assert_eq!(keys.key_for("lib-d", 1), Some("p2"));
        assert_eq!(keys.key_for("lib-d", 5), Some("p2"));
    }

    #[test]
    fn test_root_key_at_depth_zero() {
        assert_eq!(keys().key_for("app", 0), Some("p1"));
    }

    #[test]
    fn test_no_propagation_by_default() {
        assert_eq!(keys().key_for("lib-e", 1), None);
    }

    #[test]
    fn test_propagation_enabled() {
        let keys = keys().use_for_dependencies(true);
        assert_eq!(keys.key_for("lib-e", 3), Some("p1"));
        // overrides still win
        assert_eq!(keys.key_for("lib-d", 3), Some("p2"));
    }

    #[test]
    fn test_no_keys_configured() {
        let keys = InstallationKeys::new();
        assert_eq!(keys.key_for("app", 0), None);
        assert_eq!(keys.key_for("app", 1), None);
    }
}
