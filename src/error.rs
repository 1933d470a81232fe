//! Sprig 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! 任务列表本身的操作不会失败（非法输入一律 no-op），
//! 这里只覆盖配置读写这一条可失败路径。

use std::io;
use thiserror::Error;

/// Sprig 错误类型
#[derive(Debug, Error)]
pub enum SprigError {
    /// I/O 错误（配置文件读写、目录创建等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// Sprig Result 类型别名
pub type Result<T> = std::result::Result<T, SprigError>;

impl SprigError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SprigError::config("home directory not found");
        assert_eq!(err.to_string(), "Config error: home directory not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SprigError = io_err.into();
        assert!(matches!(err, SprigError::Io(_)));
    }
}
