//! 設定ファイル（~/.alib/config.toml）
//!
//! 存在しない場合はデフォルト値を使う。CLI 引数が常に優先される。

use crate::error::{AlibError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_ENV: &str = "ALIB_CONFIG";

/// alib の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// カタログファイル（.json / .toml）。未指定なら組み込みサンプル
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// 起動時のタブ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<String>,
    /// ログレベル（error / warn / info / debug / trace）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// デフォルトパスから読み込む
    ///
    /// 優先順位: ALIB_CONFIG > ~/.alib/config.toml
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む（ファイルがなければデフォルト値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AlibError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// 設定ファイルのパス
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = env_var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        env_var("HOME").map(|home| PathBuf::from(home).join(".alib").join("config.toml"))
    }
}

/// 環境変数を取得（空文字列は None として扱う）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
