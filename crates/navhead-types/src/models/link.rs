//! Navigation links and brand identity

use super::route::RouteId;
use serde::{Deserialize, Serialize};

/// A single entry of the header's link list
///
/// Supplied by the host at construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavLink {
    /// Text shown to the user
    pub label: String,
    /// Route path the link points to
    pub path: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Exact path match against the current route.
    ///
    /// `/about` is not active on `/about/team`.
    pub fn is_active(&self, route: &RouteId) -> bool {
        self.path == route.as_str()
    }
}

/// A link paired with its active flag for the current route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub link: NavLink,
    pub active: bool,
}

/// Brand block rendered at the leading edge of the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Where the brand link navigates to
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    "/".to_string()
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            title: "AK-AD REAL Estate".to_string(),
            tagline: Some("services".to_string()),
            home_path: default_home_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_exact_match() {
        let link = NavLink::new("Advisory", "/about");
        assert!(link.is_active(&RouteId::from("/about")));
    }

    #[test]
    fn test_is_active_rejects_prefix() {
        let link = NavLink::new("Advisory", "/about");
        assert!(!link.is_active(&RouteId::from("/about/team")));
        assert!(!link.is_active(&RouteId::from("/")));
    }

    #[test]
    fn test_is_active_trailing_slash_differs() {
        let link = NavLink::new("Advisory", "/about");
        assert!(!link.is_active(&RouteId::from("/about/")));
    }

    #[test]
    fn test_brand_home_path_defaults_to_root() {
        let brand: Brand = serde_json::from_str(r#"{"title":"Acme"}"#).unwrap();
        assert_eq!(brand.home_path, "/");
        assert!(brand.tagline.is_none());
    }
}
