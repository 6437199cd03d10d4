//! Configuration loading with env-var overrides.
//!
//! Reads a TOML file (explicit path, else `config/default.toml` when present,
//! else built-in defaults), then applies `BOOKSHELF_BIND` and
//! `BOOKSHELF_LOG_LEVEL` env overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the listener binds to.
    pub bind: String,
}

/// Fully-resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub log_level: String,
    /// Append log output here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { bind: default_bind() },
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Raw TOML shape, the `serde` target before resolution.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    logging: RawLogging,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLogging {
    #[serde(default = "default_log_level")]
    level: String,
    #[serde(default)]
    file: Option<String>,
}

impl Default for RawServer {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { level: default_log_level(), file: None }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config from `config_path`, or `config/default.toml` if it exists,
/// then apply env-var overrides.
///
/// An explicit path must exist. Without one, a missing default file is not an
/// error and built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let bind_override = env::var("BOOKSHELF_BIND").ok();
    let log_level_override = env::var("BOOKSHELF_LOG_LEVEL").ok();

    let path = match config_path {
        Some(p) => Some(PathBuf::from(p)),
        None => Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.is_file()),
    };

    load_from(
        path.as_deref(),
        bind_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader. Accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: Option<&Path>,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let parsed = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
            toml::from_str::<RawConfig>(&raw)
                .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?
        }
        None => RawConfig::default(),
    };

    let bind = bind_override.unwrap_or(&parsed.server.bind).to_string();
    if bind.trim().is_empty() {
        return Err(AppError::Config("server.bind must not be empty".into()));
    }

    let log_level = log_level_override.unwrap_or(&parsed.logging.level).to_string();
    EnvFilter::try_new(&log_level)
        .map_err(|e| AppError::Config(format!("invalid logging.level '{log_level}': {e}")))?;

    Ok(Config {
        server: ServerConfig { bind },
        log_level,
        log_file: parsed.logging.file.map(PathBuf::from),
    })
}
