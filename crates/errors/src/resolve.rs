//! Dependency resolution error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ResolveError {
    #[error("no version of {package} matches specifier {specifier}")]
    UnresolvableRoot { package: String, specifier: String },

    #[error("dependency traversal failed ({failures} registry call(s) failed)")]
    TraversalFailed { failures: usize },
}
