//! Configuration domain facade.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::entities::RankerConfig;
use crate::errors::{RankError, RankResult};

/// Location of the config file relative to the project directory
pub const CONFIG_FILE: &str = ".taskrank/config.json";

/// Configuration domain facade
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Config stored under `project_path`
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_path.as_ref().join(CONFIG_FILE),
        }
    }

    /// Config stored at an explicit file path
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration; a missing file yields the defaults
    pub async fn load(&self) -> RankResult<RankerConfig> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| RankError::ConfigError {
                    reason: format!("{}: {e}", self.config_path.display()),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
                Ok(RankerConfig::default())
            }
            Err(e) => Err(RankError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save configuration, creating the parent directory if needed
    pub async fn save(&self, config: &RankerConfig) -> RankResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RankError::ConfigError {
                    reason: e.to_string(),
                })?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content)
            .await
            .map_err(|e| RankError::ConfigError {
                reason: format!("{}: {e}", self.config_path.display()),
            })
    }
}
