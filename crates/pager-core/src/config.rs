use crate::error::PagerError;
use crate::pagination::DEFAULT_SIBLING_COUNT;
use crate::result::PagerResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    #[serde(default)]
    pub sibling_count: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl PagerConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/pager/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("pager/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("pager\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    /// Load a config file, reporting read and parse failures.
    pub fn load_from(path: impl AsRef<Path>) -> PagerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| PagerError::Config(e.to_string()))
    }

    pub fn effective_sibling_count(&self) -> usize {
        self.sibling_count.unwrap_or(DEFAULT_SIBLING_COUNT)
    }

    /// A configured page size of zero is treated as unset.
    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
