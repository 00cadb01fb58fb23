#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for pkgplan
//!
//! This crate provides the fundamental types used throughout the planner:
//! version specifiers with wildcard qualifiers, resolved version
//! identifiers, and the flattened installation plan.

pub mod package;
pub mod version;

// Re-export commonly used types
pub use package::{InstallPlan, PackageNode, VersionId};
pub use version::{Qualifier, VersionSpecifier};
