//! Connection settings resolution from CLI, environment and settings file

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::{defaults, settings as settings_config};
use crate::error::{PurgeError, Result};

/// Settings file contents (`~/.config/course-purge/config.json`)
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Moodle site URL
    #[serde(default)]
    pub url: Option<String>,
    /// Web-service token
    #[serde(default)]
    pub token: Option<String>,
    /// Role id of "editingteacher" on this site
    #[serde(default)]
    pub editing_teacher_role_id: Option<u64>,
    /// Web-service function that reindexes course sort order
    #[serde(default)]
    pub sortorder_function: Option<String>,
}

/// Handles reading the settings file
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Pick the settings path: explicit path, then `COURSE_PURGE_CONFIG`, then the default
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var_os(settings_config::PATH_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(Self::default_path);
        Self { path }
    }

    /// Create a store with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load settings from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!("No settings file at {}", self.path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            PurgeError::Config(format!(
                "Failed to read settings {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Loaded settings from {}", self.path.display());
        serde_json::from_str(&content).map_err(|e| {
            PurgeError::Config(format!(
                "Failed to parse settings {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Fully resolved connection to a Moodle site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub url: String,
    pub token: String,
    pub role_id: u64,
    pub sortorder_function: Option<String>,
}

impl Connection {
    /// Resolve each value with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (MOODLE_URL, MOODLE_TOKEN, MOODLE_EDITING_TEACHER_ROLE)
    /// 3. Settings file
    /// 4. Default (role id only)
    pub fn resolve(
        cli_url: Option<&str>,
        cli_token: Option<&str>,
        cli_role_id: Option<u64>,
        settings: &Settings,
    ) -> Result<Self> {
        Self::resolve_with_env(cli_url, cli_token, cli_role_id, settings, |name| {
            std::env::var(name).ok()
        })
    }

    /// Same as [`Connection::resolve`] with an injectable environment lookup
    pub fn resolve_with_env<F>(
        cli_url: Option<&str>,
        cli_token: Option<&str>,
        cli_role_id: Option<u64>,
        settings: &Settings,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = cli_url
            .map(str::to_string)
            .or_else(|| env(settings_config::URL_ENV_VAR))
            .or_else(|| settings.url.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                PurgeError::Config(format!(
                    "No Moodle URL configured. Use --url, set {} or add \"url\" to the settings file",
                    settings_config::URL_ENV_VAR
                ))
            })?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PurgeError::Config(format!(
                "Moodle URL '{}' must start with http:// or https://",
                url
            )));
        }

        let token = cli_token
            .map(str::to_string)
            .or_else(|| env(settings_config::TOKEN_ENV_VAR))
            .or_else(|| settings.token.clone())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                PurgeError::Config(format!(
                    "No web-service token configured. Use --token, set {} or add \"token\" to the settings file",
                    settings_config::TOKEN_ENV_VAR
                ))
            })?;

        let role_id = match cli_role_id {
            Some(id) => id,
            None => match env(settings_config::ROLE_ENV_VAR) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                    PurgeError::Config(format!(
                        "{} must be a role id, got '{}'",
                        settings_config::ROLE_ENV_VAR,
                        raw
                    ))
                })?,
                None => settings
                    .editing_teacher_role_id
                    .unwrap_or(defaults::EDITING_TEACHER_ROLE_ID),
            },
        };

        debug!("Using Moodle site {} (editing teacher role {})", url, role_id);

        Ok(Self {
            url,
            token,
            role_id,
            sortorder_function: settings.sortorder_function.clone(),
        })
    }
}
