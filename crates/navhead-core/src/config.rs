//! Header configuration
//!
//! Loaded from `<config_dir>/navhead/header.json` (or any `.json` / `.toml`
//! path given explicitly). Every field has a default matching the reference
//! marketing header, so an empty file is a valid configuration.

use crate::error::{CoreError, Result};
use crate::host::DEFAULT_CAPACITY;
use crate::scroll::DEFAULT_THRESHOLD_PX;
use navhead_types::{Brand, NavLink, RouteId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything fixed at header construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) past which the header turns solid
    pub scroll_threshold_px: f64,

    pub brand: Brand,

    /// Ordered link list; may be empty
    pub links: Vec<NavLink>,

    pub call_to_action: Option<NavLink>,

    /// Route the header assumes before the router reports one
    pub initial_route: RouteId,

    /// Capacity of host channels and the header event bus
    pub event_capacity: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_THRESHOLD_PX,
            brand: Brand::default(),
            links: vec![
                NavLink::new("The Portfolio", "/properties"),
                NavLink::new("Advisory", "/about"),
                NavLink::new("Concierge", "/contact"),
            ],
            call_to_action: Some(NavLink::new("Private Inquiry", "/contact")),
            initial_route: RouteId::root(),
            event_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HeaderConfig {
    /// Default location: `<config_dir>/navhead/header.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navhead").join("header.json"))
    }

    /// Strict load: any I/O, parse or validation failure is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content).map_err(|source| CoreError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?,
            Format::Toml => toml::from_str(&content).map_err(|source| CoreError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?,
        };

        config.validate()?;
        debug!(path = %path.display(), links = config.links.len(), "loaded header config");
        Ok(config)
    }

    /// Lenient load: falls back to defaults on any error (graceful degradation).
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "using default header config");
                Self::default()
            }
        }
    }

    /// Persist to `path`, format chosen by extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self).map_err(|e| CoreError::Serialize {
                message: e.to_string(),
            })?,
            Format::Toml => toml::to_string_pretty(self).map_err(|e| CoreError::Serialize {
                message: e.to_string(),
            })?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(CoreError::invalid_config(format!(
                "scroll_threshold_px must be a finite, non-negative number (got {})",
                self.scroll_threshold_px
            )));
        }

        if self.event_capacity == 0 {
            return Err(CoreError::invalid_config("event_capacity must be at least 1"));
        }

        check_path("brand.home_path", &self.brand.home_path)?;
        check_path("initial_route", self.initial_route.as_str())?;
        for (index, link) in self.links.iter().enumerate() {
            check_path(&format!("links[{}] ({})", index, link.label), &link.path)?;
        }
        if let Some(cta) = &self.call_to_action {
            check_path("call_to_action", &cta.path)?;
        }

        Ok(())
    }
}

fn check_path(field: &str, path: &str) -> Result<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(CoreError::invalid_config(format!(
            "{} must be an absolute route starting with '/' (got '{}')",
            field, path
        )))
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_reference_header() {
        let config = HeaderConfig::default();
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.links.len(), 3);
        assert_eq!(config.links[1], NavLink::new("Advisory", "/about"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(HeaderConfig::from_path(&path).unwrap(), HeaderConfig::default());
    }

    #[test]
    fn test_toml_partial_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.toml");
        std::fs::write(
            &path,
            r#"
scroll_threshold_px = 120.0
links = []
"#,
        )
        .unwrap();

        let config = HeaderConfig::from_path(&path).unwrap();
        assert_eq!(config.scroll_threshold_px, 120.0);
        assert!(config.links.is_empty());
        assert_eq!(config.brand, Brand::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("header.json");
        let mut config = HeaderConfig::default();
        config.call_to_action = None;

        config.save(&path).unwrap();
        assert_eq!(HeaderConfig::from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = HeaderConfig {
            scroll_threshold_px: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig { .. })));
    }

    #[test]
    fn test_relative_link_rejected() {
        let mut config = HeaderConfig::default();
        config.links.push(NavLink::new("Blog", "blog"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("links[3] (Blog)"));
    }

    #[test]
    fn test_load_or_default_on_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(HeaderConfig::load_or_default(&path), HeaderConfig::default());
        assert_eq!(
            HeaderConfig::load_or_default(&dir.path().join("missing.json")),
            HeaderConfig::default()
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.yaml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            HeaderConfig::from_path(&path),
            Err(CoreError::UnsupportedFormat { .. })
        ));
    }
}
