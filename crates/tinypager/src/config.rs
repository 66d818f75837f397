//! Configuration file support for tinypager
//!
//! Config file location: `~/.config/tinypager/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [pager]
//! current = 1
//! total = 20
//! visible_pages = 5
//! fixed_pages = 1
//!
//! [titles]
//! prev = "prev"
//! next = "next"
//! ellipsis = "..."
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tinypager_core::PaginationConfig;

/// Pager defaults
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagerConfig {
    /// Page selected on startup
    pub current: usize,
    /// Number of pages
    pub total: usize,
    /// Pages shown around the current page
    pub visible_pages: usize,
    /// Pages pinned at each end
    pub fixed_pages: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        let defaults = PaginationConfig::default();
        Self {
            current: defaults.current,
            total: defaults.total,
            visible_pages: defaults.visible_count,
            fixed_pages: defaults.fixed_count,
        }
    }
}

/// Labels of the prev/next controls and of the ellipsis
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TitlesConfig {
    pub prev: String,
    pub next: String,
    pub ellipsis: String,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            prev: "prev".to_string(),
            next: "next".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Values given on the command line, taking precedence over the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerOverrides {
    pub current: Option<usize>,
    pub total: Option<usize>,
    pub visible_pages: Option<usize>,
    pub fixed_pages: Option<usize>,
}

/// Root configuration
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub pager: PagerConfig,
    pub titles: TitlesConfig,
}

impl Config {
    /// Get all possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("tinypager").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tinypager").join("config.toml"));
        }

        // ~/Library/Application Support on macOS
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("tinypager").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// Get the first existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load config from the XDG config path.
    /// Returns default config if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config file found, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "Failed to load config: {:#}", err);
                Self::default()
            }
        }
    }

    /// Load an explicit config file; errors are returned, not swallowed
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge CLI overrides over the file values (not validated)
    pub fn pagination(&self, overrides: &PagerOverrides) -> PaginationConfig {
        PaginationConfig::new(
            overrides.current.unwrap_or(self.pager.current),
            overrides.total.unwrap_or(self.pager.total),
            overrides.visible_pages.unwrap_or(self.pager.visible_pages),
            overrides.fixed_pages.unwrap_or(self.pager.fixed_pages),
        )
    }
}
