use crate::error::{CrmError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "minicrm.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsConfig {
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub sms: Option<SmsConfig>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            email: Some(EmailConfig {
                from: "crm@example.com".to_string(),
                to: "admin@example.com".to_string(),
            }),
            sms: Some(SmsConfig {
                phone: "+33612345678".to_string(),
            }),
        }
    }
}

/// Configuration for minicrm, stored in `minicrm.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmConfig {
    /// Backing document for the json backend
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub notifiers: NotifierConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backend: Backend::default(),
            notifiers: NotifierConfig::default(),
        }
    }
}

impl CrmConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CrmError::Config(format!("{}: {}", config_path.display(), e)))?;
        let config: CrmConfig = serde_json::from_str(&content)
            .map_err(|e| CrmError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .map_err(|e| CrmError::Config(format!("{}: {}", config_dir.display(), e)))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CrmError::Config(e.to_string()))?;
        fs::write(&config_path, content)
            .map_err(|e| CrmError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(())
    }

    /// Resolve a relative `data_file` against `base`.
    pub fn data_file_in(&self, base: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base.join(&self.data_file)
        }
    }
}
