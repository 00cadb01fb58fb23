//! Registry query error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RegistryError {
    #[error("registry query failed: {message}")]
    QueryFailed { message: String },

    #[error("malformed registry record: {message}")]
    MalformedRecord { message: String },
}

impl RegistryError {
    /// Create a query failure from any transport error message
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed {
            message: message.into(),
        }
    }
}
