//! Registry query construction
//!
//! The three query shapes the planner issues, serialized to the
//! collaborator's filter syntax. Criteria logic stays in
//! [`crate::criteria`]; this module only assembles strings.

use crate::criteria::VersionCriteria;
use pkgplan_types::VersionId;
use std::fmt::Write as _;

/// Best-matching version for a package name plus cascading criteria;
/// newest first, single row.
pub(crate) fn best_version(package: &str, criteria: &VersionCriteria) -> String {
    let mut query = format!(
        "SELECT version_id, major, minor, patch, build FROM package_versions \
         WHERE package_name = '{package}'"
    );
    if !criteria.is_empty() {
        let _ = write!(query, " AND {}", criteria.to_filter());
    }
    query.push_str(" ORDER BY major DESC, minor DESC, patch DESC, build DESC LIMIT 1");
    query
}

/// Dependency list of one version, gated by its installation key when
/// the registry protects the metadata.
pub(crate) fn direct_dependencies(version_id: &VersionId, installation_key: Option<&str>) -> String {
    let mut query = format!(
        "SELECT dependencies FROM version_metadata WHERE version_id = '{version_id}'"
    );
    if let Some(key) = installation_key {
        let _ = write!(query, " AND installation_key = '{key}'");
    }
    query
}

/// Owning package names for a batch of version ids. One query per
/// dependency-fetch step keeps query volume proportional to graph
/// breadth, not edge count.
pub(crate) fn package_names(version_ids: &[VersionId]) -> String {
    let ids: Vec<_> = version_ids
        .iter()
        .map(|id| format!("'{id}'"))
        .collect();
    format!(
        "SELECT version_id, package_name FROM package_versions \
         WHERE version_id IN ({}) ORDER BY package_name DESC",
        ids.join(",")
    )
}
