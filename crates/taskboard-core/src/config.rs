use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "taskboard.json";
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3030";

/// Identity stamped on comments and activities created from this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberConfig {
    pub id: String,
    pub fullname: String,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl Default for MemberConfig {
    fn default() -> Self {
        Self {
            id: "m101".to_string(),
            fullname: "Riya Revdiwala".to_string(),
            img_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub server_addr: Option<String>,
    #[serde(default)]
    pub member: Option<MemberConfig>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn effective_server_addr(&self) -> &str {
        self.server_addr.as_deref().unwrap_or(DEFAULT_SERVER_ADDR)
    }

    pub fn effective_member(&self) -> MemberConfig {
        self.member.clone().unwrap_or_default()
    }
}
