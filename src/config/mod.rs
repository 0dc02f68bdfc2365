use crate::errors::AppResult;
use crate::models::session::DEFAULT_ACTIVITY;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_activity")]
    pub default_activity: String,
    #[serde(default = "default_use_12hour")]
    pub use_12hour_format: bool,
}

fn default_data_file() -> String {
    Config::sessions_file().to_string_lossy().to_string()
}
fn default_activity() -> String {
    DEFAULT_ACTIVITY.to_string()
}
fn default_use_12hour() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_activity: default_activity(),
            use_12hour_format: default_use_12hour(),
        }
    }
}

impl Config {
    /// Return the standard application directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("session_tracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".session_tracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sessiontracker.conf")
    }

    /// Return the default path of the sessions file
    pub fn sessions_file() -> PathBuf {
        Self::config_dir().join("sessions.json")
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by the defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Failed to read configuration {}: {e}. Using defaults.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration and sessions file.
    /// Returns the sessions file path that was set up.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let data_path = match custom_file {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::sessions_file(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file:   {:?}", Self::config_file());
        }

        // Create an empty sessions file if not exists
        if let Some(parent) = data_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !data_path.exists() {
            fs::write(&data_path, "[]")?;
        }

        println!("✅ Sessions file: {:?}", data_path);

        Ok(data_path)
    }
}
