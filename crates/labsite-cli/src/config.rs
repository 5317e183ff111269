//! Configuration loading from TOML files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use labsite_core::DocumentSource;
use labsite_publications::EngineConfig;
use serde::Deserialize;

/// Global configuration for labsite
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub engine: EngineConfig,
    pub http: HttpConfig,
}

/// Locations of the site's data documents (URLs or paths)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(deserialize_with = "deserialize_env_location")]
    pub publications: String,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub tags: Option<String>,
    #[serde(deserialize_with = "deserialize_env_location")]
    pub projects: String,
    /// Publications page that research projects link to
    pub publications_page: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            publications: "data/publications/publications.json".to_string(),
            tags: None,
            projects: "data/research/research.json".to_string(),
            publications_page: "publications.html".to_string(),
        }
    }
}

impl DataConfig {
    pub fn publications_source(&self) -> DocumentSource {
        DocumentSource::parse(&self.publications)
    }

    pub fn tags_source(&self) -> Option<DocumentSource> {
        self.tags.as_deref().map(DocumentSource::parse)
    }

    pub fn projects_source(&self) -> DocumentSource {
        DocumentSource::parse(&self.projects)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds to wait for a document before giving up
    pub read_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { read_timeout: 10 }
    }
}

/// Deserialize a string that may contain environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| expand_env_var(&s)))
}

/// Like `deserialize_env_var`, but the location is required: an unset variable is an error.
fn deserialize_env_location<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    expand_env_var(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("environment variable in {s:?} is not set")))
}

/// Expand ${VAR} to environment variable value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./labsite.toml (current directory)
    /// 2. ~/.config/labsite/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("labsite.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "labsite") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
