//! Version specifier parsing with wildcard qualifiers
//!
//! A specifier has up to four dot-separated qualifier slots
//! (major.minor.patch.build). Each slot is either a concrete number or one
//! of the wildcard keywords:
//! - `LATEST` - highest available version for this slot onward
//! - `LATESTRELEASED` - highest published (finalized) version
//!
//! Examples: `1.2.3.4`, `1.2.LATEST`, `LATESTRELEASED`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single version qualifier slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualifier {
    /// Concrete version number
    Exact(u32),
    /// Highest available version
    Latest,
    /// Highest published version
    LatestReleased,
}

impl Qualifier {
    /// Parse one dot-separated token. Returns `None` for anything that is
    /// neither a keyword nor a plain decimal number.
    fn parse_token(token: &str) -> Option<Self> {
        match token {
            "LATEST" => Some(Self::Latest),
            "LATESTRELEASED" => Some(Self::LatestReleased),
            _ => {
                if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                    token.parse().ok().map(Self::Exact)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Latest => write!(f, "LATEST"),
            Self::LatestReleased => write!(f, "LATESTRELEASED"),
        }
    }
}

/// A parsed version specifier with four qualifier slots
///
/// Slots are filled left-to-right from the source string; an absent slot
/// implies every slot to its right is also absent. Parsing never fails:
/// a malformed token leaves that slot and everything after it unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionSpecifier {
    pub major: Option<Qualifier>,
    pub minor: Option<Qualifier>,
    pub patch: Option<Qualifier>,
    pub build: Option<Qualifier>,
}

impl VersionSpecifier {
    /// Parse a raw version string such as `"1.2.LATEST"`.
    ///
    /// Tokens beyond the fourth are ignored. Missing trailing tokens leave
    /// the corresponding slots absent.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut slots = [None; 4];
        for (slot, token) in slots.iter_mut().zip(input.trim().split('.')) {
            match Qualifier::parse_token(token) {
                Some(qualifier) => *slot = Some(qualifier),
                // Incomprehensible token: this slot and everything to its
                // right stays unspecified.
                None => break,
            }
        }
        let [major, minor, patch, build] = slots;
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Slots in (major, minor, patch, build) order
    #[must_use]
    pub fn slots(&self) -> [Option<Qualifier>; 4] {
        [self.major, self.minor, self.patch, self.build]
    }

    /// Whether the major slot carries any qualifier at all
    #[must_use]
    pub fn has_major(&self) -> bool {
        self.major.is_some()
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for slot in self.slots().into_iter().flatten() {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{slot}")?;
            first = false;
        }
        Ok(())
    }
}
