use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Errors raised while reading an explicit configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `[server]` table
    pub server: ServerSettings,
    /// `[engine]` table
    pub engine: EngineSettings,
}

/// HTTP binding and CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Host address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_permissive: true,
        }
    }
}

/// Limits applied before a sort runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Largest input array accepted from clients. Traces hold O(N²)
    /// snapshots of N values each, so this bounds response size.
    pub max_array_len: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { max_array_len: 50 }
    }
}

/// TOML representation of the `[server]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_permissive: Option<bool>,
}

/// TOML representation of the `[engine]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlEngineConfig {
    pub max_array_len: Option<usize>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub server: Option<TomlServerConfig>,
    pub engine: Option<TomlEngineConfig>,
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// A missing file is normal; an unreadable or invalid one is logged and
    /// ignored.
    pub fn load() -> Self {
        let config_file = config_path();
        if !config_file.exists() {
            return Config::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_file.display(), error = %e, "Ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML contents and merge them over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();
        config.merge(toml_config);
        Ok(config)
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(server) = toml_config.server {
            if let Some(host) = server.host {
                self.server.host = host;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(cors_permissive) = server.cors_permissive {
                self.server.cors_permissive = cors_permissive;
            }
        }

        if let Some(engine) = toml_config.engine {
            if let Some(max_array_len) = engine.max_array_len {
                self.engine.max_array_len = max_array_len;
            }
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    pub fn with_max_array_len(mut self, max_array_len: usize) -> Self {
        self.engine.max_array_len = max_array_len;
        self
    }
}
