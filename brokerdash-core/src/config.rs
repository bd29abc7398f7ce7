use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrokerdashConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatasetConfig {
    /// External record file. The built-in sample brokerage is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json_format: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_true")]
    pub mouse_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_theme() -> String {
    "Tokyo Night".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            color: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme(),
            mouse_enabled: true,
        }
    }
}

impl BrokerdashConfig {
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from_paths(get_config_paths())
    }

    /// Loads an explicit config file on top of the default search paths.
    pub fn load_with_file(path: PathBuf) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file {} does not exist", path.display()),
            )));
        }
        let mut paths = get_config_paths();
        paths.push(path);
        Self::load_from_paths(paths)
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<Self, ConfigLoadError> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("BROKERDASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut brokerdash_config: BrokerdashConfig = config.try_deserialize()?;

        if let Ok(path) = std::env::var("BROKERDASH_DATASET") {
            if !path.is_empty() {
                brokerdash_config.dataset.path = Some(PathBuf::from(path));
            }
        }

        if let Ok(level) = std::env::var("BROKERDASH_LOG_LEVEL") {
            brokerdash_config.logging.level = level;
        }

        brokerdash_config.validate()?;

        Ok(brokerdash_config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigLoadError::InvalidValue {
                key: "tui.tick_rate_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigLoadError::InvalidValue {
                key: "display.currency_symbol".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level_lower = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level_lower.as_str()) && !level_lower.contains('=') {
            return Err(ConfigLoadError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Must be one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn dataset_path(&self) -> Option<&PathBuf> {
        self.dataset.path.as_ref()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config").join("default.toml"));
        paths.push(cwd.join("config").join("local.toml"));
        paths.push(cwd.join("brokerdash.toml"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut env_paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        env_paths.push(cwd.join(".env"));
    }
    if let Some(config_dir) = get_config_dir() {
        env_paths.push(config_dir.join(".env"));
    }

    for path in env_paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("brokerdash"))
}

pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("brokerdash"))
}

pub fn ensure_data_dir() -> Result<PathBuf, std::io::Error> {
    let data_dir = get_data_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
    }

    Ok(data_dir)
}
