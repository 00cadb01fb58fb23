//! Package node and installation plan types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for one concrete package version in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId(String);

impl VersionId {
    /// Create a new version identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VersionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One resolved vertex of the dependency graph
///
/// Carries the installation key that was used to read its dependency
/// metadata, so installers can reuse it. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNode {
    pub name: String,
    pub version_id: VersionId,
    pub installation_key: Option<String>,
}

impl PackageNode {
    /// Create a new package node
    pub fn new(
        name: impl Into<String>,
        version_id: VersionId,
        installation_key: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version_id,
            installation_key,
        }
    }
}

impl fmt::Display for PackageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version_id)
    }
}

/// Dependency-first installation plan
///
/// An ordered sequence of nodes in which every node's transitive
/// dependencies appear before the node itself. The same package version
/// may appear more than once when independent branches depend on it;
/// deduplication is deliberately not performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    nodes: Vec<PackageNode>,
}

impl InstallPlan {
    /// Create an empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single node at the end of the plan
    pub fn push(&mut self, node: PackageNode) {
        self.nodes.push(node);
    }

    /// Splice another plan onto the end of this one, preserving its order
    pub fn append(&mut self, other: InstallPlan) {
        self.nodes.extend(other.nodes);
    }

    /// Nodes in installation order
    #[must_use]
    pub fn nodes(&self) -> &[PackageNode] {
        &self.nodes
    }

    /// Number of nodes in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the plan contains no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in installation order
    pub fn iter(&self) -> std::slice::Iter<'_, PackageNode> {
        self.nodes.iter()
    }
}

impl IntoIterator for InstallPlan {
    type Item = PackageNode;
    type IntoIter = std::vec::IntoIter<PackageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a InstallPlan {
    type Item = &'a PackageNode;
    type IntoIter = std::slice::Iter<'a, PackageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
