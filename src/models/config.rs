use super::session::MockTestConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the config file relative to the project root
pub const CONFIG_PATH: &str = "lnat/config.toml";

/// Quality gate applied to freshly generated question batches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Invalid batches scoring below this are logged as a warning
    pub warn_below: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self { warn_below: 50 }
    }
}

/// lnat-check configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LnatConfig {
    /// Directory holding the persisted session record
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,

    #[serde(default)]
    pub quality: QualityConfig,

    /// Shape of a full mock paper
    #[serde(default)]
    pub mock: MockTestConfig,
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".lnat")
}

impl Default for LnatConfig {
    fn default() -> Self {
        Self {
            session_dir: default_session_dir(),
            quality: QualityConfig::default(),
            mock: MockTestConfig::default(),
        }
    }
}

impl LnatConfig {
    /// Load config from lnat/config.toml
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: LnatConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Save config to lnat/config.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = project_root.join(CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Session directory resolved against the project root
    pub fn session_dir(&self, project_root: &Path) -> PathBuf {
        if self.session_dir.is_absolute() {
            self.session_dir.clone()
        } else {
            project_root.join(&self.session_dir)
        }
    }
}
