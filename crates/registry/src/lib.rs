#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Registry access for pkgplan
//!
//! This crate talks to the package registry through an external
//! query-executing collaborator. It owns the typed row models, the
//! structured version-criteria builder, query-string construction, and a
//! thin client facade exposing the three query shapes the planner needs:
//! find-best-version, fetch-dependencies, and batch-resolve-names.
//!
//! No transport is provided here; callers supply a [`QueryExecutor`].

mod client;
mod criteria;
mod executor;
mod models;
mod queries;

pub use client::RegistryClient;
pub use criteria::{VersionCriteria, VersionField, VersionPredicate};
pub use executor::{QueryExecutor, ResultSet};
pub use models::{DependencyList, DependencyRef, DependencyRow, PackageNameRow, VersionRow};
