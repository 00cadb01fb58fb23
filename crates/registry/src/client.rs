//! Registry client facade
//!
//! Wraps a [`QueryExecutor`] with the three typed operations the planner
//! needs. Decoding happens here so the traversal only ever sees typed
//! rows.

use crate::criteria::VersionCriteria;
use crate::executor::QueryExecutor;
use crate::models::{DependencyRow, PackageNameRow, VersionRow};
use crate::queries;
use pkgplan_errors::Result;
use pkgplan_types::{VersionId, VersionSpecifier};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

fn decode<T: DeserializeOwned>(record: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(record)?)
}

/// Typed access to the package registry through a query executor
#[derive(Clone)]
pub struct RegistryClient<E> {
    executor: E,
}

impl<E: QueryExecutor> RegistryClient<E> {
    /// Create a new client over an executor
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// The underlying query executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Find the single best-matching version id for a package name and
    /// specifier.
    ///
    /// An absent major qualifier means the specifier cannot identify a
    /// version; `None` is returned without issuing a query. Otherwise a
    /// single query runs, ordered newest-first and limited to one row.
    ///
    /// # Errors
    ///
    /// Propagates executor failures; callers treat a failure here as
    /// fatal for the run.
    pub async fn find_best_version(
        &self,
        package: &str,
        specifier: &VersionSpecifier,
    ) -> Result<Option<VersionId>> {
        if !specifier.has_major() {
            return Ok(None);
        }

        let criteria = VersionCriteria::from_specifier(specifier);
        let query = queries::best_version(package, &criteria);
        debug!(package, %specifier, "querying best matching version");
        let result = self.executor.execute(&query).await?;

        let Some(record) = result.records.into_iter().next() else {
            return Ok(None);
        };
        let row: VersionRow = decode(record)?;
        Ok(Some(row.version_id))
    }

    /// Fetch the direct dependency version ids of one resolved version.
    ///
    /// The installation key, when present, gates visibility of the
    /// dependency metadata. A version row without a dependency list (or
    /// no row at all) yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns executor failures to the caller; the traversal absorbs
    /// them into its run state instead of aborting.
    pub async fn fetch_direct_dependencies(
        &self,
        version_id: &VersionId,
        installation_key: Option<&str>,
    ) -> Result<Vec<VersionId>> {
        let query = queries::direct_dependencies(version_id, installation_key);
        debug!(%version_id, "querying direct dependencies");
        let result = self.executor.execute(&query).await?;

        let Some(record) = result.records.into_iter().next() else {
            return Ok(Vec::new());
        };
        let row: DependencyRow = decode(record)?;
        Ok(row
            .dependencies
            .map(|list| list.ids.into_iter().map(|dep| dep.version_id).collect())
            .unwrap_or_default())
    }

    /// Resolve a batch of version ids to their owning package names.
    ///
    /// Issued once per dependency-fetch step, not once per edge. Ids the
    /// registry does not know are simply missing from the map.
    ///
    /// # Errors
    ///
    /// Returns executor failures to the caller.
    pub async fn package_names_for(
        &self,
        version_ids: &[VersionId],
    ) -> Result<HashMap<VersionId, String>> {
        if version_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = queries::package_names(version_ids);
        debug!(count = version_ids.len(), "querying package names");
        let result = self.executor.execute(&query).await?;

        result
            .records
            .into_iter()
            .map(|record| {
                let row: PackageNameRow = decode(record)?;
                Ok((row.version_id, row.package_name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ResultSet;
    use async_trait::async_trait;
    use pkgplan_errors::{Error, RegistryError};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Executor that replays canned rows and records every query
    struct CannedExecutor {
        rows: Vec<Value>,
        queries: Mutex<Vec<String>>,
        fail: bool,
    }

    impl CannedExecutor {
        fn returning(rows: Vec<Value>) -> Self {
            Self {
                rows,
                queries: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: Vec::new(),
                queries: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn query_count(&self) -> usize {
            self.queries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl QueryExecutor for CannedExecutor {
        async fn execute(&self, query: &str) -> Result<ResultSet> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(RegistryError::query_failed("registry unavailable").into());
            }
            Ok(ResultSet::new(self.rows.clone()))
        }
    }

    #[tokio::test]
    async fn test_find_best_version() {
        let executor = CannedExecutor::returning(vec![json!({
            "version_id": "04t1", "major": 1, "minor": 4, "patch": 0, "build": 12
        })]);
        let client = RegistryClient::new(executor);

        let id = client
            .find_best_version("app-core", &VersionSpecifier::parse("1.LATEST"))
            .await
            .unwrap();
        assert_eq!(id, Some(VersionId::from("04t1")));
    }

    #[tokio::test]
    async fn test_find_best_version_no_rows() {
        let executor = CannedExecutor::returning(vec![]);
        let client = RegistryClient::new(executor);

        let id = client
            .find_best_version("app-core", &VersionSpecifier::parse("9"))
            .await
            .unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn test_absent_major_issues_no_query() {
        let executor = CannedExecutor::returning(vec![]);
        let client = RegistryClient::new(executor);

        let id = client
            .find_best_version("app-core", &VersionSpecifier::parse("garbage"))
            .await
            .unwrap();
        assert_eq!(id, None);
        assert_eq!(client.executor.query_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_dependencies_missing_field() {
        let executor = CannedExecutor::returning(vec![json!({})]);
        let client = RegistryClient::new(executor);

        let deps = client
            .fetch_direct_dependencies(&VersionId::from("04t1"), None)
            .await
            .unwrap();
        assert!(deps.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_dependencies() {
        let executor = CannedExecutor::returning(vec![json!({
            "dependencies": { "ids": [ { "version_id": "04ta" }, { "version_id": "04tb" } ] }
        })]);
        let client = RegistryClient::new(executor);

        let deps = client
            .fetch_direct_dependencies(&VersionId::from("04t1"), Some("key"))
            .await
            .unwrap();
        assert_eq!(deps, vec![VersionId::from("04ta"), VersionId::from("04tb")]);
    }

    #[tokio::test]
    async fn test_package_names_batch() {
        let executor = CannedExecutor::returning(vec![
            json!({ "version_id": "04ta", "package_name": "lib-a" }),
            json!({ "version_id": "04tb", "package_name": "lib-b" }),
        ]);
        let client = RegistryClient::new(executor);

        let names = client
            .package_names_for(&[VersionId::from("04ta"), VersionId::from("04tb")])
            .await
            .unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[&VersionId::from("04tb")], "lib-b");
        assert_eq!(client.executor.query_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_issues_no_query() {
        let executor = CannedExecutor::returning(vec![]);
        let client = RegistryClient::new(executor);

        let names = client.package_names_for(&[]).await.unwrap();
        assert!(names.is_empty());
        assert_eq!(client.executor.query_count(), 0);
    }

    #[tokio::test]
    async fn test_executor_failure_propagates() {
        let client = RegistryClient::new(CannedExecutor::failing());

        let err = client
            .find_best_version("app-core", &VersionSpecifier::parse("1"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Registry(RegistryError::QueryFailed { .. })
        ));
    }
}
