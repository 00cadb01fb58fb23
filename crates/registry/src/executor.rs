//! Query-executing collaborator boundary

use async_trait::async_trait;
use pkgplan_errors::Result;
use serde_json::Value;

/// One batch of rows returned by the registry
///
/// Records are loosely typed at this boundary; the client decodes them
/// into the typed row models before anything else touches them.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub records: Vec<Value>,
}

impl ResultSet {
    /// Create a result set from raw records
    #[must_use]
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// A result set with no rows
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// External collaborator that executes registry queries
///
/// Implementations own the transport entirely (process spawning, HTTP,
/// in-memory fixtures). A failed call maps to
/// `RegistryError::QueryFailed`; the planner decides per call site
/// whether that aborts the run or is absorbed into the traversal state.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute one query and return its rows
    async fn execute(&self, query: &str) -> Result<ResultSet>;
}
