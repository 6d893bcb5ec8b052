use crate::error::{DclError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "DCL_CONFIG_DIR";
const DEFAULT_PAGER: &str = "less -R";

/// Configuration for dcl, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DclConfig {
    /// Where the action symlinks live (default: next to the executable)
    #[serde(default)]
    pub link_dir: Option<PathBuf>,

    /// Command that long output is piped through with `--pager`
    #[serde(default = "default_pager")]
    pub pager: String,
}

fn default_pager() -> String {
    DEFAULT_PAGER.to_string()
}

impl Default for DclConfig {
    fn default() -> Self {
        Self {
            link_dir: None,
            pager: default_pager(),
        }
    }
}

impl DclConfig {
    /// `$DCL_CONFIG_DIR`, or the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("us", "RickerNet", "dcl")
            .map(|p| p.config_dir().to_path_buf())
            .ok_or_else(|| DclError::Config("could not determine a config directory".into()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DclConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The link directory: an explicit override wins, then the configured
    /// directory, then the directory holding `executable`.
    pub fn resolve_link_dir(&self, override_dir: Option<&Path>, executable: &Path) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.link_dir.clone())
            .or_else(|| executable.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The pager split into program and arguments.
    pub fn pager_command(&self) -> Option<(String, Vec<String>)> {
        let mut words = self.pager.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some((program, words.collect()))
    }
}
