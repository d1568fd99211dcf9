//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名
const APP_DIR: &str = "dynamic-form-tui";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 默认加载的 schema 文件（命令行参数优先）
    pub schema_path: Option<PathBuf>,
    /// 日志文件，缺省为配置目录下的 `dynamic-form-tui.log`
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            schema_path: None,
            log_file: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务：`<config_dir>/dynamic-form-tui/config.json`
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录（取不到时退回当前目录）
    pub fn new() -> Self {
        Self::with_dir(
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        )
    }

    /// 使用指定目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 配置文件路径
    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    /// 实际使用的日志文件路径
    pub fn log_path(&self, config: &AppConfig) -> PathBuf {
        config
            .log_file
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("{APP_DIR}.log")))
    }

    fn read(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let path = self.config_path();
        let Some(text) = Self::read(&path)? else {
            return Ok(AppConfig::default());
        };

        match serde_json::from_str(&text) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let text = serde_json::to_string_pretty(config)?;
        let path = self.config_path();
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
