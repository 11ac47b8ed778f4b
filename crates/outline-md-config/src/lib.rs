use outline_md_engine::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid start_heading in {config_path}: must be between 1 and {max}")]
    InvalidStartHeading { config_path: PathBuf, max: usize },
}

/// User defaults for conversions, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown heading level for top-level bullets.
    pub start_heading: usize,
    /// Deepest indentation level rendered as a heading.
    pub heading_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderConfig::default();
        Self {
            start_heading: render.start_heading,
            heading_depth: render.heading_depth,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if !(1..=RenderConfig::MAX_START_HEADING).contains(&config.start_heading) {
            return Err(ConfigError::InvalidStartHeading {
                config_path: config_path.to_path_buf(),
                max: RenderConfig::MAX_START_HEADING,
            });
        }

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/outline-md");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.start_heading, self.heading_depth)
    }

    pub fn from_render_config(render: &RenderConfig) -> Self {
        Self {
            start_heading: render.start_heading,
            heading_depth: render.heading_depth,
        }
    }
}
