//! Recursive dependency graph traversal

use crate::keys::InstallationKeys;
use pkgplan_errors::{ResolveError, Result};
use pkgplan_registry::{QueryExecutor, RegistryClient};
use pkgplan_types::{InstallPlan, PackageNode, VersionId, VersionSpecifier};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Per-run failure accumulator shared by every traversal frame.
///
/// Lives exactly as long as one resolution run and is inspected only
/// after the full walk returns. Atomic so child branches may be
/// evaluated concurrently without further synchronization.
#[derive(Debug, Default)]
struct TraversalState {
    failures: AtomicUsize,
}

impl TraversalState {
    fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    fn failure_count(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Dependency resolver producing flat installation plans
#[derive(Clone)]
pub struct Resolver<E> {
    registry: RegistryClient<E>,
}

impl<E: QueryExecutor> Resolver<E> {
    /// Create a new resolver over a query executor
    pub fn new(executor: E) -> Self {
        Self {
            registry: RegistryClient::new(executor),
        }
    }

    /// The underlying query executor
    pub fn executor(&self) -> &E {
        self.registry.executor()
    }

    /// Resolve a package and everything it transitively requires into a
    /// dependency-first installation plan.
    ///
    /// The returned plan may contain the same package version more than
    /// once when independent branches depend on it, and silently omits
    /// branches the registry does not know.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnresolvableRoot`] when the specifier has no
    ///   major qualifier or no version matches; no partial plan exists.
    /// - [`ResolveError::TraversalFailed`] when any dependency-fetch or
    ///   name-batch query failed during the walk. Sibling branches still
    ///   resolve, but callers must not install the partial result.
    /// - Transport errors from the root version lookup propagate as-is.
    ///
    /// Dropping the returned future cancels the run at the next registry
    /// call; a cancelled run yields no plan, same as the error path.
    pub async fn resolve(
        &self,
        package: &str,
        specifier: &str,
        keys: &InstallationKeys,
    ) -> Result<InstallPlan> {
        debug!(package, specifier, "resolving dependencies");

        let parsed = VersionSpecifier::parse(specifier);
        let Some(version_id) = self.registry.find_best_version(package, &parsed).await? else {
            return Err(ResolveError::UnresolvableRoot {
                package: package.to_string(),
                specifier: specifier.to_string(),
            }
            .into());
        };

        let state = TraversalState::default();
        let plan = self
            .resolve_subtree(Some(version_id), Some(package.to_string()), 0, keys, &state)
            .await;

        let failures = state.failure_count();
        if failures > 0 {
            return Err(ResolveError::TraversalFailed { failures }.into());
        }

        debug!(package, nodes = plan.len(), "resolution complete");
        Ok(plan)
    }

    /// Resolve one subtree rooted at a version id.
    ///
    /// Returns the subtree's plan: all children's results in registry
    /// edge order, then this frame's own node. Failures are recorded on
    /// the run state rather than returned, so sibling frames already
    /// enqueued at the parent keep going.
    async fn resolve_subtree(
        &self,
        version_id: Option<VersionId>,
        package: Option<String>,
        depth: usize,
        keys: &InstallationKeys,
        state: &TraversalState,
    ) -> InstallPlan {
        // Guard: a dependency the registry could not locate contributes
        // nothing and does not fail the run.
        let (Some(version_id), Some(package)) = (version_id, package) else {
            debug!(depth, "package not found in registry, skipping branch");
            return InstallPlan::new();
        };

        debug!(depth, %version_id, package, "visiting");

        let installation_key = keys.key_for(&package, depth);
        let edges = match self
            .registry
            .fetch_direct_dependencies(&version_id, installation_key)
            .await
        {
            Ok(edges) => edges,
            Err(err) => {
                warn!(depth, package, error = %err, "dependency fetch failed");
                state.record_failure();
                return InstallPlan::new();
            }
        };

        let mut plan = InstallPlan::new();
        if !edges.is_empty() {
            // One batched name lookup per frame, not per edge.
            let names = match self.registry.package_names_for(&edges).await {
                Ok(names) => names,
                Err(err) => {
                    warn!(depth, package, error = %err, "name resolution failed");
                    state.record_failure();
                    return plan;
                }
            };

            for edge in edges {
                let name = names.get(&edge).cloned();
                let child = Box::pin(self.resolve_subtree(Some(edge), name, depth + 1, keys, state))
                    .await;
                plan.append(child);
            }
        }

        plan.push(PackageNode::new(
            package,
            version_id,
            installation_key.map(String::from),
        ));
        plan
    }
}
