use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AlbatrozError, Result};

/// File holding the per-project configuration.
pub const CONFIG_FILE: &str = "albatroz.json";

/// Where component sources are downloaded from unless overridden.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/albatroz-ui/albatroz/main/components";

/// Dependency flags observed at the last `init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub expo: bool,
    #[serde(default, rename = "lucide-react-native")]
    pub lucide_react_native: bool,
}

/// Contents of `albatroz.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub dependencies: Dependencies,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dependencies: Dependencies::default(),
        }
    }
}

impl Config {
    /// Check that `base_url` is an absolute `http` or `https` URL.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url().map(|_| ())
    }

    /// Parse `base_url`, rejecting anything that is not `http(s)`.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AlbatrozError::Config(format!("baseUrl '{}': {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AlbatrozError::Config(format!(
                "baseUrl must use http or https, got '{other}'"
            ))),
        }
    }
}

/// Reads and writes `albatroz.json` in a project directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn in_dir(root: &Path) -> Self {
        Self {
            path: root.join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Parse the config file. Fails on malformed JSON or an invalid `baseUrl`.
    pub fn read(&self) -> Result<Config> {
        let content = std::fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| AlbatrozError::Config(format!("{}: {e}", self.path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Overwrite the config file with pretty-printed JSON.
    pub fn write(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let mut json = serde_json::to_string_pretty(config)
            .map_err(|e| AlbatrozError::Config(e.to_string()))?;
        json.push('\n');
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "Wrote config");
        Ok(())
    }
}
