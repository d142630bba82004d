use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv, washington.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_raw_page_size")]
    pub raw_page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_raw_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_separator_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            raw_page_size: default_raw_page_size(),
            separator_char: default_separator_char(),
            separator_width: default_separator_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbikeshare")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbikeshare.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if self.raw_page_size == 0 {
            return Err(AppError::Config(
                "raw_page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Data directory with a leading `~/` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Horizontal rule printed between report sections
    pub fn separator(&self) -> String {
        self.separator_char.repeat(self.separator_width)
    }

    /// Write a default configuration file (unless `is_test`)
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = Config::default().to_yaml()?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }
}
