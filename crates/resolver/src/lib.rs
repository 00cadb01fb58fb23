#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Dependency resolution for pkgplan
//!
//! This crate walks the transitive dependency graph of a package version
//! against the registry and flattens it into a dependency-first
//! [`InstallPlan`](pkgplan_types::InstallPlan). The traversal is
//! depth-first and sequential; registry calls are the only suspension
//! points. A branch that cannot be located is skipped with a diagnostic,
//! a branch whose fetch fails marks the run as failed while its siblings
//! keep resolving, and the aggregate failure surfaces only after the
//! whole walk completes.

mod keys;
mod resolver;

pub use keys::InstallationKeys;
pub use resolver::Resolver;
