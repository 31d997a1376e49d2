//! Layered settings for the extrapolator.
//!
//! Sources, lowest precedence first:
//! - Default values
//! - TOML settings file (`.extrapolate/settings.toml`, or `--config`)
//! - Environment variables
//! - CLI arguments (applied by the caller)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `EX_` and use double underscores
//! to separate nested levels:
//! - `EX_INPUT__PATH=data.txt` sets `input.path`
//! - `EX_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".extrapolate";
const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "EX_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the settings schema
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    /// File read when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an explicit entry
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `"extrapolate::summary" = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_input_path() -> PathBuf {
    PathBuf::from("input")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            input: InputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from the workspace settings file (if any) and environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(&config_path).extract().map_err(Box::new)
    }

    /// Load settings from a specific file, still honouring the environment.
    ///
    /// A missing file is an error here, unlike [`Settings::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Box::new(figment::Error::from(format!(
                "settings file not found: {}",
                path.display()
            ))));
        }

        Self::figment(path).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels; single underscores stay
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find `.extrapolate/settings.toml` in the current directory or an ancestor.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
