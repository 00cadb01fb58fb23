//! Typed registry row models
//!
//! Rows come back from the collaborator as loose field/value mappings.
//! They are decoded into these structs immediately so that absent fields
//! are explicit `Option`s instead of dynamic lookups. "No dependency
//! list" and "empty dependency list" stay distinguishable here even
//! though the traverser treats both as the end of recursion.

use pkgplan_types::VersionId;
use serde::Deserialize;

/// Row returned by the find-best-version query
#[derive(Debug, Clone, Deserialize)]
pub struct VersionRow {
    pub version_id: VersionId,
    #[serde(default)]
    pub major: Option<u32>,
    #[serde(default)]
    pub minor: Option<u32>,
    #[serde(default)]
    pub patch: Option<u32>,
    #[serde(default)]
    pub build: Option<u32>,
}

/// Row returned by the fetch-dependencies query
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyRow {
    #[serde(default)]
    pub dependencies: Option<DependencyList>,
}

/// Declared direct dependencies of one package version
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependencyList {
    #[serde(default)]
    pub ids: Vec<DependencyRef>,
}

/// One edge of the dependency list, referencing the target version
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyRef {
    pub version_id: VersionId,
}

/// Row returned by the batch-resolve-names query
#[derive(Debug, Clone, Deserialize)]
pub struct PackageNameRow {
    pub version_id: VersionId,
    pub package_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_row_with_absent_numbers() {
        let row: VersionRow =
            serde_json::from_value(json!({ "version_id": "04t1", "major": 3 })).unwrap();
        assert_eq!(row.version_id.as_str(), "04t1");
        assert_eq!(row.major, Some(3));
        assert_eq!(row.build, None);
    }

    #[test]
    fn test_missing_vs_empty_dependency_list() {
        let missing: DependencyRow = serde_json::from_value(json!({})).unwrap();
        assert!(missing.dependencies.is_none());

        let empty: DependencyRow =
            serde_json::from_value(json!({ "dependencies": { "ids": [] } })).unwrap();
        assert!(empty.dependencies.unwrap().ids.is_empty());
    }

    #[test]
    fn test_dependency_refs() {
        let row: DependencyRow = serde_json::from_value(json!({
            "dependencies": { "ids": [ { "version_id": "04ta" }, { "version_id": "04tb" } ] }
        }))
        .unwrap();
        let ids = row.dependencies.unwrap().ids;
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].version_id.as_str(), "04tb");
    }
}
