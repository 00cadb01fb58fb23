//! Structured version filter criteria
//!
//! The cascading qualifier semantics live here as typed predicates; the
//! string form only exists at the query boundary. Cascade rule, evaluated
//! slot by slot starting at major:
//! - a concrete number emits an equality predicate and continues right;
//! - `LATEST` emits nothing and stops;
//! - `LATESTRELEASED` emits the released predicate and stops;
//! - an absent slot stops.

use pkgplan_types::{Qualifier, VersionSpecifier};
use std::fmt;

/// Version qualifier column in the registry schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
    Build,
}

impl VersionField {
    /// Fields in cascade order
    pub const ALL: [Self; 4] = [Self::Major, Self::Minor, Self::Patch, Self::Build];
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::Build => write!(f, "build"),
        }
    }
}

/// One typed filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPredicate {
    /// Equality constraint on one qualifier column
    QualifierEquals(VersionField, u32),
    /// Only published (finalized) versions
    Released,
}

impl fmt::Display for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QualifierEquals(field, value) => write!(f, "{field} = {value}"),
            Self::Released => write!(f, "released = true"),
        }
    }
}

/// Ordered predicate list produced by the qualifier cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCriteria {
    predicates: Vec<VersionPredicate>,
}

impl VersionCriteria {
    /// Build criteria from a specifier by the cascade rule
    #[must_use]
    pub fn from_specifier(specifier: &VersionSpecifier) -> Self {
        let mut predicates = Vec::new();
        for (field, slot) in VersionField::ALL.into_iter().zip(specifier.slots()) {
            match slot {
                Some(Qualifier::Exact(value)) => {
                    predicates.push(VersionPredicate::QualifierEquals(field, value));
                }
                Some(Qualifier::Latest) | None => break,
                Some(Qualifier::LatestReleased) => {
                    predicates.push(VersionPredicate::Released);
                    break;
                }
            }
        }
        Self { predicates }
    }

    /// The predicates in slot order
    #[must_use]
    pub fn predicates(&self) -> &[VersionPredicate] {
        &self.predicates
    }

    /// Whether the cascade produced no constraint at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Serialize to the AND-joined filter fragment; empty when no
    /// predicate was produced
    #[must_use]
    pub fn to_filter(&self) -> String {
        let parts: Vec<_> = self.predicates.iter().map(ToString::to_string).collect();
        parts.join(" AND ")
    }
}
