//! Browser configuration
//!
//! Read from `config.yaml` in the platform config directory, or from an
//! explicit path. Command-line flags are applied on top via
//! [`BrowserConfig::with_overrides`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{Dataset, DEFAULT_PAGE_SIZE};
use crate::theme::ThemeMode;
use crate::{CatalogError, Result};

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Start-up settings for a browsing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Books revealed per page
    pub page_size: usize,

    /// Initial theme; probed from the environment when unset
    pub theme: Option<ThemeMode>,

    /// Dataset file; the bundled sample catalog when unset
    pub dataset: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
            dataset: None,
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub page_size: Option<usize>,
    pub theme: Option<ThemeMode>,
    pub dataset: Option<PathBuf>,
}

impl BrowserConfig {
    /// Load from an explicit path, or from the default location if present
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: BrowserConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "bookconnect", "bookconnect")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("bookconnect")))
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if overrides.theme.is_some() {
            self.theme = overrides.theme;
        }
        if overrides.dataset.is_some() {
            self.dataset = overrides.dataset;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::Configuration(
                "page_size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// The theme to start with
    pub fn initial_theme(&self) -> ThemeMode {
        self.theme.unwrap_or_else(ThemeMode::from_environment)
    }

    /// Load the configured dataset
    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.dataset {
            Some(path) => Dataset::load(path),
            None => Dataset::bundled(),
        }
    }
}
