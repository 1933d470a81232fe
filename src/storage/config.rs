//! 应用配置持久化
//!
//! 只存放环境配置（当前主题）。任务数据不落盘，随会话结束丢弃。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::sprig_dir;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> Result<PathBuf> {
    Ok(sprig_dir()?.join("config.toml"))
}

/// 从指定路径加载配置（文件缺失或损坏时回退默认值）
fn load_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置到指定路径
fn save_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_from(&path),
        Err(_) => Config::default(),
    }
}

/// 保存配置（确保 ~/.sprig 目录存在）
pub fn save_config(config: &Config) -> Result<()> {
    save_to(&config_path()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            theme: ThemeConfig {
                name: "Dracula".to_string(),
            },
        };
        save_to(&path, &config).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.theme.name, "Dracula");
    }

    #[test]
    fn test_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("missing.toml"));
        assert_eq!(loaded.theme.name, "Auto");
    }

    #[test]
    fn test_corrupt_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.theme.name, "Auto");
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_to(&path, &Config::default()).unwrap();
        assert!(path.exists());
    }
}
