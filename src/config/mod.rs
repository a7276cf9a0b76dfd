use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::split::RECONCILIATION_TOLERANCE;

const DEFAULT_DIR_NAME: &str = ".tabsplit";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "TABSPLIT_HOME";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User preferences for rendering and locating receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "Config::default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "Config::default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Receipt read when none is given on the command line.
    #[serde(default = "Config::default_receipt_value")]
    pub default_receipt: PathBuf,
    #[serde(default = "Config::default_tolerance")]
    pub reconciliation_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            decimal_separator: Self::default_decimal_separator(),
            grouping_separator: Self::default_grouping_separator(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_receipt: Self::default_receipt_value(),
            reconciliation_tolerance: Self::default_tolerance(),
        }
    }
}

impl Config {
    pub fn default_decimal_separator() -> char {
        '.'
    }

    pub fn default_grouping_separator() -> char {
        ','
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_receipt_value() -> PathBuf {
        PathBuf::from("receipt.yaml")
    }

    pub fn default_tolerance() -> f64 {
        RECONCILIATION_TOLERANCE
    }

    pub fn locale(&self) -> LocaleConfig {
        LocaleConfig {
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }
}

/// Returns the application directory, defaulting to `~/.tabsplit`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn from_env() -> Self {
        Self::with_base_dir(&app_data_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Missing files yield [`Config::default`].
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency":"eur"}"#).expect("parses");
        assert_eq!(config.currency.as_str(), "EUR");
        assert_eq!(config.default_receipt, PathBuf::from("receipt.yaml"));
        assert!(config.ui_color_enabled);
    }
}
