use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub csv_dir: String,
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
    #[serde(default = "default_notion_api_url")]
    pub notion_api_url: String,
    #[serde(default = "default_notion_version")]
    pub notion_version: String,
    #[serde(default)]
    pub notion_token: Option<String>,
    #[serde(default)]
    pub database_id: Option<String>,
    /// Company holidays (YYYY-MM-DD) counted on top of the public ones.
    #[serde(default)]
    pub extra_holidays: Vec<String>,
}

fn default_audit_log() -> String {
    Config::audit_log_file().to_string_lossy().to_string()
}
fn default_notion_api_url() -> String {
    DEFAULT_NOTION_API_URL.to_string()
}
fn default_notion_version() -> String {
    DEFAULT_NOTION_VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_dir: Self::csv_dir_default().to_string_lossy().to_string(),
            audit_log: default_audit_log(),
            notion_api_url: default_notion_api_url(),
            notion_version: default_notion_version(),
            notion_token: None,
            database_id: None,
            extra_holidays: Vec::new(),
        }
    }
}

/// Everything the Notion client needs, resolved from file + environment.
#[derive(Debug, Clone)]
pub struct NotionSettings {
    pub api_url: String,
    pub version: String,
    pub token: String,
    pub database_id: String,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworktime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    pub fn csv_dir_default() -> PathBuf {
        Self::config_dir().join("work_time")
    }

    pub fn audit_log_file() -> PathBuf {
        Self::config_dir().join("rworktime.log")
    }

    /// Load configuration from file, or return defaults if not found.
    /// NOTION_TOKEN / DATABASE_ID from the environment win over the file.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(token) = env::var("NOTION_TOKEN")
            && !token.trim().is_empty()
        {
            cfg.notion_token = Some(token);
        }
        if let Ok(id) = env::var("DATABASE_ID")
            && !id.trim().is_empty()
        {
            cfg.database_id = Some(id);
        }

        Ok(cfg)
    }

    pub fn csv_path(&self) -> PathBuf {
        expand_tilde(&self.csv_dir)
    }

    pub fn audit_log_path(&self) -> PathBuf {
        expand_tilde(&self.audit_log)
    }

    /// Credentials and identifiers for the remote row store.
    pub fn notion_settings(&self) -> AppResult<NotionSettings> {
        let token = self
            .notion_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "missing Notion token (set NOTION_TOKEN or notion_token in the config file)"
                        .into(),
                )
            })?;
        let database_id = self
            .database_id
            .clone()
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "missing database id (set DATABASE_ID or database_id in the config file)"
                        .into(),
                )
            })?;

        Ok(NotionSettings {
            api_url: self.notion_api_url.trim_end_matches('/').to_string(),
            version: self.notion_version.clone(),
            token,
            database_id,
        })
    }

    /// Copy safe to print: the token is masked.
    pub fn redacted(&self) -> Self {
        let mut c = self.clone();
        if let Some(t) = &c.notion_token {
            let tail: String = t
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            c.notion_token = Some(format!("****{}", tail));
        }
        c
    }

    /// Initialize configuration file and CSV directory
    pub fn init_all(csv_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(custom) = csv_dir {
            let p = PathBuf::from(&custom);
            config.csv_dir = if p.is_absolute() {
                custom
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(config.csv_path())?;
        println!("✅ CSV folder:  {:?}", config.csv_path());

        Ok(config)
    }
}
