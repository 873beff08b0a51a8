use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PYTHON_ENV: &str = "PORTFOLIO_PYTHON";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub index_path: PathBuf,
    pub site_data_path: PathBuf,
    pub python: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/posts"),
            index_path: PathBuf::from("data/posts.json"),
            site_data_path: PathBuf::from("data/site.json"),
            python: "python3".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio").join("config.json"))
    }

    /// 使用するインタプリタ（環境変数を優先）
    pub fn python(&self) -> String {
        match std::env::var(PYTHON_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.python.clone(),
        }
    }
}
