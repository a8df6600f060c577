//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! theme preference, initial auth mode, form timings and the submission
//! backend.

mod error;

pub use error::ConfigError;

use crate::backend::SimulatedDelays;
use crate::error::AppError;
use crate::forms::{AuthDelays, AuthMode};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/educoach-tui";
const MAX_TIMING_MS: u64 = 60_000;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub initial_auth_mode: AuthMode,
    pub timings: Timings,
    pub backend: BackendSpec,
    file_path: Option<PathBuf>,
}

/// Delays used by the forms and the simulated backend, in milliseconds.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub contact_submit_ms: u64,
    pub login_submit_ms: u64,
    pub register_submit_ms: u64,
    pub contact_acknowledge_ms: u64,
    pub login_redirect_ms: u64,
    pub register_return_ms: u64,
    pub close_reset_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            contact_submit_ms: 2000,
            login_submit_ms: 1500,
            register_submit_ms: 2000,
            contact_acknowledge_ms: 5000,
            login_redirect_ms: 1000,
            register_return_ms: 1500,
            close_reset_ms: 300,
        }
    }
}

impl Timings {
    pub fn simulated_delays(&self) -> SimulatedDelays {
        SimulatedDelays {
            contact: Duration::from_millis(self.contact_submit_ms),
            login: Duration::from_millis(self.login_submit_ms),
            register: Duration::from_millis(self.register_submit_ms),
        }
    }

    pub fn auth_delays(&self) -> AuthDelays {
        AuthDelays {
            close_reset: Duration::from_millis(self.close_reset_ms),
            login_redirect: Duration::from_millis(self.login_redirect_ms),
            register_return: Duration::from_millis(self.register_return_ms),
        }
    }

    pub fn contact_acknowledge(&self) -> Duration {
        Duration::from_millis(self.contact_acknowledge_ms)
    }

    fn named(&self) -> [(&'static str, u64); 7] {
        [
            ("contact_submit_ms", self.contact_submit_ms),
            ("login_submit_ms", self.login_submit_ms),
            ("register_submit_ms", self.register_submit_ms),
            ("contact_acknowledge_ms", self.contact_acknowledge_ms),
            ("login_redirect_ms", self.login_redirect_ms),
            ("register_return_ms", self.register_return_ms),
            ("close_reset_ms", self.close_reset_ms),
        ]
    }
}

/// Which backend receives submitted forms.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendSpec {
    Simulated {
        #[serde(default)]
        failure_rate: f64,
    },
    Http {
        base_url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

impl Default for BackendSpec {
    fn default() -> Self {
        BackendSpec::Simulated { failure_rate: 0.0 }
    }
}

impl BackendSpec {
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            BackendSpec::Simulated { failure_rate } => {
                if !(0.0..=1.0).contains(failure_rate) {
                    return Err(ConfigError::InvalidFailureRate(*failure_rate));
                }
            }
            BackendSpec::Http {
                base_url,
                timeout_ms,
            } => {
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(ConfigError::InvalidBaseUrl(base_url.clone()));
                }
                if *timeout_ms == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
            }
        }
        Ok(())
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub initial_auth_mode: AuthMode,
    #[serde(default)]
    pub timings: Timings,
    #[serde(default)]
    pub backend: BackendSpec,
}

impl FileSpec {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value_ms) in self.timings.named() {
            if value_ms > MAX_TIMING_MS {
                return Err(ConfigError::TimingTooLong {
                    name,
                    value_ms,
                    max_ms: MAX_TIMING_MS,
                });
            }
        }
        self.backend.validate()
    }
}

fn default_theme_name() -> String {
    "educoach".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            initial_auth_mode: AuthMode::default(),
            timings: Timings::default(),
            backend: BackendSpec::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;

        if file_path.exists() {
            debug!("Loading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::Read {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                    path: file_path.clone(),
                    message: e.to_string(),
                })?;
            data.validate()?;
            self.theme_name = data.theme_name;
            self.initial_auth_mode = data.initial_auth_mode;
            self.timings = data.timings;
            self.backend = data.backend;
        } else {
            debug!(
                "No configuration at {}, using defaults.",
                file_path.display()
            );
        }

        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            initial_auth_mode: self.initial_auth_mode,
            timings: self.timings,
            backend: self.backend.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::Encode(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_from(dir: &TempDir) -> Result<Config, AppError> {
        let mut config = Config::new();
        config.load(dir.path().to_str())?;
        Ok(config)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from(&dir).unwrap();
        assert_eq!(config.theme_name, "educoach");
        assert_eq!(config.initial_auth_mode, AuthMode::Login);
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.backend, BackendSpec::default());
    }

    #[test]
    fn reads_partial_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "theme_name: nord\n\
             initial_auth_mode: register\n\
             timings:\n  login_redirect_ms: 250\n\
             backend:\n  kind: http\n  base_url: https://api.example.com\n",
        )
        .unwrap();

        let config = load_from(&dir).unwrap();
        assert_eq!(config.theme_name, "nord");
        assert_eq!(config.initial_auth_mode, AuthMode::Register);
        assert_eq!(config.timings.login_redirect_ms, 250);
        assert_eq!(config.timings.close_reset_ms, 300);
        assert_eq!(
            config.backend,
            BackendSpec::Http {
                base_url: "https://api.example.com".to_string(),
                timeout_ms: 10_000,
            }
        );
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut config = load_from(&dir).unwrap();
        config.theme_name = "gruvbox".to_string();
        config.backend = BackendSpec::Simulated { failure_rate: 0.5 };
        config.save().unwrap();

        let reloaded = load_from(&dir).unwrap();
        assert_eq!(reloaded.theme_name, "gruvbox");
        assert_eq!(reloaded.backend, BackendSpec::Simulated { failure_rate: 0.5 });
    }

    #[test]
    fn rejects_out_of_range_failure_rate() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "backend:\n  kind: simulated\n  failure_rate: 2.0\n",
        )
        .unwrap();
        let result = load_from(&dir);
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidFailureRate(_)))
        ));
    }

    #[test]
    fn rejects_http_backend_without_scheme() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "backend:\n  kind: http\n  base_url: api.example.com\n",
        )
        .unwrap();
        assert!(matches!(
            load_from(&dir),
            Err(AppError::Config(ConfigError::InvalidBaseUrl(url))) if url == "api.example.com"
        ));
    }

    #[test]
    fn rejects_zero_http_timeout() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "backend:\n  kind: http\n  base_url: http://localhost:8080\n  timeout_ms: 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_from(&dir),
            Err(AppError::Config(ConfigError::ZeroTimeout))
        ));
    }

    #[test]
    fn rejects_overlong_timing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "timings:\n  close_reset_ms: 120000\n",
        )
        .unwrap();
        assert!(matches!(
            load_from(&dir),
            Err(AppError::Config(ConfigError::TimingTooLong {
                name: "close_reset_ms",
                value_ms: 120_000,
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), "timings: [1, 2").unwrap();
        assert!(matches!(
            load_from(&dir),
            Err(AppError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn save_without_path_fails() {
        assert!(matches!(
            Config::new().save(),
            Err(AppError::Config(ConfigError::NotLoaded))
        ));
    }

    #[test]
    fn timings_convert_to_delays() {
        let timings = Timings::default();
        assert_eq!(timings.simulated_delays(), SimulatedDelays::default());
        assert_eq!(timings.auth_delays(), AuthDelays::default());
        assert_eq!(timings.contact_acknowledge(), Duration::from_secs(5));
    }
}
