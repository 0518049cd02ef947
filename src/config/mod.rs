use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Ticket notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Role that sees the board grouped by department.
    #[serde(default = "default_grouping_role")]
    pub grouping_role: String,
    /// Departments whose open tickets each role is notified about.
    /// `"*"` means every department.
    #[serde(default = "default_role_departments")]
    pub role_departments: BTreeMap<String, Vec<String>>,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_poll_interval() -> u64 {
    60
}
fn default_grouping_role() -> String {
    "admin".to_string()
}
fn default_role_departments() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        ("admin".to_string(), vec!["*".to_string()]),
        ("it".to_string(), vec!["IT".to_string()]),
        ("hr".to_string(), vec!["HR".to_string()]),
        (
            "finance".to_string(),
            vec!["Finance".to_string(), "Payroll".to_string()],
        ),
    ])
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            grouping_role: default_grouping_role(),
            role_departments: default_role_departments(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            session_file: default_session_file(),
            output_dir: default_output_dir(),
            notify: NotifyConfig::default(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.hrportal`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hrportal")
    }

    /// Full path of the default config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hrportal.conf")
    }

    /// Load configuration from `path` (or the default location). A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    pub fn session_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.session_file)
    }

    pub fn output_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.output_dir)
    }
}
