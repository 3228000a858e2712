//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the ledger JSON file.
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Layers, lowest first: built-in defaults, the user's `config.toml`,
    /// `config_path`, then `MD_*` variables such as `MD_DATA_FILE`.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_config) = user_config_file() {
            figment = figment.merge(Toml::file(user_config));
        }
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("MD_")).extract()
    }
}

/// `config.toml` under the platform config directory, e.g. `~/.config/md/config.toml`.
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("md").join("config.toml"))
}

/// `mandays.json` under the platform data directory, or in the working
/// directory when there is none.
fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| PathBuf::from("."), |p| p.join("md"))
        .join("mandays.json")
}
