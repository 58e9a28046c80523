use crate::core::Blacklist;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub blacklist: Vec<String>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl LookupConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LookupConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn blacklist(&self) -> Blacklist {
        self.blacklist.iter().cloned().collect()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        for name in &self.blacklist {
            validate_non_empty_string("blacklist", name)?;
        }
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}
