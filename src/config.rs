//! 設定ファイル
//!
//! 読み込み先の優先順位: `ROOMLIST_CONFIG`（空文字は未設定扱い）>
//! `~/.roomlist/config.toml`。ファイルが無ければデフォルト設定。

use crate::bindings::Bindings;
use crate::error::{Result, RoomListError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_ENV: &str = "ROOMLIST_CONFIG";

/// 環境変数を取得（空文字列は None）
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// 設定ファイルのパス
pub fn default_path() -> Option<PathBuf> {
    if let Some(path) = env_var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    env_var("HOME").map(|home| PathBuf::from(home).join(".roomlist").join("config.toml"))
}

// ============================================================================
// Config
// ============================================================================

/// 設定全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// デフォルトのルームファイル（相対パスは設定ファイルのディレクトリ基準）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<PathBuf>,

    #[serde(default)]
    pub bindings: BindingsConfig,
}

/// フィルタトリガーのキー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingsConfig {
    pub direct: char,
    pub encrypted: char,
    pub unread: char,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            direct: 'd',
            encrypted: 'e',
            unread: 'u',
        }
    }
}

impl BindingsConfig {
    pub fn to_bindings(&self) -> Result<Bindings> {
        Bindings::from_keys(self.direct, self.encrypted, self.unread)
    }
}

impl Config {
    /// デフォルトパスから読み込む
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 指定パスから読み込む。存在しなければデフォルト設定
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| RoomListError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| RoomListError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // キー設定は読み込み時に検証する
        config.bindings.to_bindings()?;

        if let (Some(rooms), Some(base)) = (&config.rooms, path.parent()) {
            if rooms.is_relative() {
                config.rooms = Some(base.join(rooms));
            }
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// ルームファイルを決定（引数 > 設定ファイル）
    pub fn resolve_rooms(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.rooms.clone())
            .ok_or(RoomListError::NoRoomFile)
    }

    /// TOML 文字列に変換（UTF-8 でないパスはエラー）
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
