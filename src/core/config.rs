//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pegcross/config.toml`. It is optional and only ever
//! read; a missing file means defaults.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PegConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    /// ANSI 256-color index for the active cell border.
    pub active_color: Option<u8>,
    pub frame: Option<FrameStyle>,
}

/// Border drawn around the whole board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    #[default]
    Double,
    Rounded,
    Thick,
    Plain,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACTIVE_COLOR: u8 = 208;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

pub const LOG_LEVEL_VAR: &str = "PEGCROSS_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "PEGCROSS_LOG_FILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub active_color: u8,
    pub frame: FrameStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            active_color: DEFAULT_ACTIVE_COLOR,
            frame: FrameStyle::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LogLevel,
    /// `None` disables logging; stdout belongs to the board.
    pub log_file: Option<PathBuf>,
    pub theme: Theme,
    /// Problems found while resolving, logged once the logger is up.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    NotFound(PathBuf),
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(p) => write!(f, "config file {} does not exist", p.display()),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pegcross/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pegcross").join("config.toml"))
}

/// Load config from `path`, or from `~/.pegcross/config.toml` when `path` is
/// `None`.
///
/// A missing default file yields `PegConfig::default()`. A missing explicit
/// file returns `ConfigError::NotFound`, a malformed one `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<PegConfig, ConfigError> {
    if let Some(explicit) = path
        && !explicit.exists()
    {
        return Err(ConfigError::NotFound(explicit.to_path_buf()));
    }

    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PegConfig::default());
        }
    };

    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(PegConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PegConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` and `cli_log_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &PegConfig,
    cli_log_level: Option<LogLevel>,
    cli_log_file: Option<&Path>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_log_level, cli_log_file, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment supplied by `env`.
pub fn resolve_with_env<E>(
    config: &PegConfig,
    cli_log_level: Option<LogLevel>,
    cli_log_file: Option<&Path>,
    env: E,
) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .or_else(|| env_log_level(&env, &mut warnings))
        .or(config.general.log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → none
    let log_file = cli_log_file
        .map(Path::to_path_buf)
        .or_else(|| env(LOG_FILE_VAR).map(PathBuf::from))
        .or_else(|| config.general.log_file.clone());

    ResolvedConfig {
        log_level,
        log_file,
        theme: Theme {
            active_color: config
                .theme
                .active_color
                .unwrap_or(DEFAULT_ACTIVE_COLOR),
            frame: config.theme.frame.unwrap_or_default(),
        },
        warnings,
    }
}

fn env_log_level(
    env: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<String>,
) -> Option<LogLevel> {
    let value = env(LOG_LEVEL_VAR)?;
    match LogLevel::from_str(&value, true) {
        Ok(level) => Some(level),
        Err(_) => {
            warnings.push(format!("Ignoring unknown {} value {:?}", LOG_LEVEL_VAR, value));
            None
        }
    }
}
