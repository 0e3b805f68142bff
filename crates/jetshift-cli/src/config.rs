//! TOML-based user defaults.
//!
//! Stores the traveler's usual values so repeated invocations need fewer
//! flags:
//! - Home timezone
//! - Usual bedtime and wake time
//! - Default departure time
//!
//! Configuration is stored at `~/.config/jetshift/config.toml`. Set
//! `JETSHIFT_ENV=dev` to use `~/.config/jetshift-dev/` instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use jetshift_core::timeutil;

/// User defaults for plan generation.
///
/// Serialized to/from TOML at `~/.config/jetshift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Home timezone IANA id, used when `--from` is omitted.
    #[serde(default)]
    pub home_timezone: String,
    #[serde(default = "default_bedtime")]
    pub bedtime: String,
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    #[serde(default = "default_departure_time")]
    pub departure_time: String,
}

// Default functions
fn default_bedtime() -> String {
    "23:00".into()
}
fn default_wake_time() -> String {
    "07:00".into()
}
fn default_departure_time() -> String {
    "12:00".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_timezone: String::new(),
            bedtime: default_bedtime(),
            wake_time: default_wake_time(),
            departure_time: default_departure_time(),
        }
    }
}

/// Returns `~/.config/jetshift[-dev]/` based on JETSHIFT_ENV.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created.
pub fn config_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("JETSHIFT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("jetshift-dev")
    } else {
        base_dir.join("jetshift")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    pub fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults first if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if
    /// the default config cannot be written.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "home_timezone" => Some(self.home_timezone.clone()),
            "bedtime" => Some(self.bedtime.clone()),
            "wake_time" => Some(self.wake_time.clone()),
            "departure_time" => Some(self.departure_time.clone()),
            _ => None,
        }
    }

    /// Set a config value by key and persist it.
    ///
    /// Time values must be valid HH:MM and the home timezone must be a
    /// known IANA id; bad values are rejected before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value fails
    /// validation, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "home_timezone" => {
                jetshift_core::tz::resolve(value)?;
                self.home_timezone = value.to_string();
            }
            "bedtime" | "wake_time" | "departure_time" => {
                if !timeutil::is_valid_time(value) {
                    return Err(format!("invalid time '{value}': expected HH:MM").into());
                }
                match key {
                    "bedtime" => self.bedtime = value.to_string(),
                    "wake_time" => self.wake_time = value.to_string(),
                    _ => self.departure_time = value.to_string(),
                }
            }
            _ => return Err(format!("unknown config key: {key}").into()),
        }
        self.save()?;
        Ok(())
    }
}
