//! Integration tests for registry query emission
//!
//! Verifies the exact query text handed to the collaborator for each of
//! the three query shapes.

use async_trait::async_trait;
use pkgplan_errors::Result;
use pkgplan_registry::{QueryExecutor, RegistryClient, ResultSet};
use pkgplan_types::{VersionId, VersionSpecifier};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingExecutor {
    queries: Mutex<Vec<String>>,
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn execute(&self, query: &str) -> Result<ResultSet> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(ResultSet::empty())
    }
}

fn last_query(client: &RegistryClient<RecordingExecutor>) -> String {
    client.executor().queries.lock().unwrap().last().unwrap().clone()
}

#[tokio::test]
async fn test_best_version_query_text() {
    let client = RegistryClient::new(RecordingExecutor::default());
    client
        .find_best_version("app-core", &VersionSpecifier::parse("2.1.LATESTRELEASED"))
        .await
        .unwrap();

    let query = last_query(&client);
    assert!(query.starts_with(
        "SELECT version_id, major, minor, patch, build FROM package_versions"
    ));
    assert!(query.contains("package_name = 'app-core'"));
    assert!(query.contains("major = 2 AND minor = 1 AND released = true"));
    assert!(query.ends_with("ORDER BY major DESC, minor DESC, patch DESC, build DESC LIMIT 1"));
    // The cascade stopped at LATESTRELEASED; patch/build never surface.
    assert!(!query.contains("patch ="));
    assert!(!query.contains("build ="));
}

#[tokio::test]
async fn test_dependency_query_text() {
    let client = RegistryClient::new(RecordingExecutor::default());
    client
        .fetch_direct_dependencies(&VersionId::from("04t1"), Some("s3cret"))
        .await
        .unwrap();

    let query = last_query(&client);
    assert_eq!(
        query,
        "SELECT dependencies FROM version_metadata WHERE version_id = '04t1' \
         AND installation_key = 's3cret'"
    );
}

#[tokio::test]
async fn test_batch_names_query_text() {
    let client = RegistryClient::new(RecordingExecutor::default());
    client
        .package_names_for(&[VersionId::from("04ta"), VersionId::from("04tb")])
        .await
        .unwrap();

    let query = last_query(&client);
    assert_eq!(
        query,
        "SELECT version_id, package_name FROM package_versions \
         WHERE version_id IN ('04ta','04tb') ORDER BY package_name DESC"
    );
}
