//! Route identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the current navigation route (the location path, e.g. `/about`)
///
/// Compared verbatim: `/about` and `/about/` are different routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// The site root, `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RouteId {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for RouteId {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RouteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
