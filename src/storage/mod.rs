pub mod config;

use std::path::PathBuf;

use crate::error::{Result, SprigError};

/// 获取 ~/.sprig/ 目录路径
pub fn sprig_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".sprig"))
        .ok_or_else(|| SprigError::config("cannot find home directory"))
}
