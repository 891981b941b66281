//! Configuration for the Taskify server.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskify/config.toml`)
//! 4. Compiled defaults

use crate::task::domain::PositionPolicy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TaskifyConfigFile {
    server: ServerFileConfig,
    database: DatabaseFileConfig,
    positions: PositionsFileConfig,
    identity: IdentityFileConfig,
    templates: TemplatesFileConfig,
}

/// `[server]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
    allowed_origins: Option<Vec<String>>,
}

/// `[database]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct DatabaseFileConfig {
    url: Option<String>,
    max_connections: Option<u32>,
}

/// `[positions]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct PositionsFileConfig {
    compact_vacated: Option<bool>,
    validate_columns: Option<bool>,
}

/// `[identity]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct IdentityFileConfig {
    tokens: BTreeMap<String, String>,
    expired_tokens: Vec<String>,
}

/// `[templates]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TemplatesFileConfig {
    seed: Option<bool>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Taskify kanban server")]
pub struct TaskifyCliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKIFY_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/taskify/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// `PostgreSQL` connection URL. Without one, data lives in memory.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Close the slot a task leaves behind when it moves or is deleted.
    #[arg(long)]
    pub compact_vacated: Option<bool>,

    /// Reject moves into columns the board does not define.
    #[arg(long)]
    pub validate_columns: Option<bool>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKIFY_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskifyConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:3000`).
    pub bind_addr: String,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
    /// `PostgreSQL` connection URL; `None` selects the in-memory stores.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub max_connections: u32,
    /// Reindexing policy.
    pub positions: PositionPolicy,
    /// Static `token -> subject` table for the bundled verifier.
    pub tokens: BTreeMap<String, String>,
    /// Tokens reported as expired by the bundled verifier.
    pub expired_tokens: Vec<String>,
    /// Seed the built-in template boards at start-up.
    pub seed_templates: bool,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for TaskifyConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_owned(),
            allowed_origins: Vec::new(),
            database_url: None,
            max_connections: 8,
            positions: PositionPolicy::default(),
            tokens: BTreeMap::new(),
            expired_tokens: Vec::new(),
            seed_templates: true,
            log_level: "info".to_owned(),
        }
    }
}

impl TaskifyConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &TaskifyCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, file))
    }

    /// Priority: CLI > file > default.
    fn resolve(cli: &TaskifyCliArgs, file: TaskifyConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or(defaults.bind_addr),
            allowed_origins: file
                .server
                .allowed_origins
                .unwrap_or(defaults.allowed_origins),
            database_url: cli.database_url.clone().or(file.database.url),
            max_connections: file
                .database
                .max_connections
                .unwrap_or(defaults.max_connections),
            positions: PositionPolicy {
                compact_vacated: cli
                    .compact_vacated
                    .or(file.positions.compact_vacated)
                    .unwrap_or(defaults.positions.compact_vacated),
                validate_columns: cli
                    .validate_columns
                    .or(file.positions.validate_columns)
                    .unwrap_or(defaults.positions.validate_columns),
            },
            tokens: file.identity.tokens,
            expired_tokens: file.identity.expired_tokens,
            seed_templates: file.templates.seed.unwrap_or(defaults.seed_templates),
            log_level: cli.log_level.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn load_config_file(explicit_path: Option<&Path>) -> Result<TaskifyConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(TaskifyConfigFile::default());
    };
    let path = config_dir.join("taskify").join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(TaskifyConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
