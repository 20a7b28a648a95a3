//! ルームファイルの読み込み
//!
//! 拡張子で形式を判定する。JSON / YAML はトップレベルの配列か
//! `rooms` 配列を持つオブジェクト、TOML は `[[rooms]]` テーブル。

use super::entry::RoomEntry;
use super::list::RoomList;
use crate::error::{Result, RoomListError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// ルームファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFileFormat {
    Json,
    Toml,
    Yaml,
}

impl RoomFileFormat {
    /// 拡張子から形式を判定（大文字小文字は区別しない）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RoomFileFormat::Json),
            "toml" => Some(RoomFileFormat::Toml),
            "yaml" | "yml" => Some(RoomFileFormat::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomFileFormat::Json => "json",
            RoomFileFormat::Toml => "toml",
            RoomFileFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for RoomFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `rooms` 配列を持つルート構造（TOML は常にこの形）
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomsDocument {
    rooms: Vec<RoomEntry>,
}

/// ルームファイルを読み込む
///
/// ルーム ID の重複はエラー。並び順はファイルの順序を保つ。
pub fn load_rooms(path: &Path) -> Result<RoomList> {
    let format = RoomFileFormat::from_path(path)
        .ok_or_else(|| RoomListError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| RoomListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rooms = parse_rooms(&content, format).map_err(|message| RoomListError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    })?;

    let mut seen = HashSet::new();
    for room in &rooms {
        if !seen.insert(room.id.as_str()) {
            return Err(RoomListError::DuplicateRoom {
                path: path.to_path_buf(),
                id: room.id.clone(),
            });
        }
    }

    let list = RoomList::from(rooms);
    if list.is_empty() {
        warn!(path = %path.display(), "Room file contains no rooms");
    }
    info!(path = %path.display(), %format, count = list.len(), "Loaded room file");
    Ok(list)
}

/// 文字列をルーム一覧としてパース
///
/// JSON / YAML はルートの形（配列かオブジェクトか）を先に判定し、
/// その形で文字列から読み直す。エラーには行・列が残る。
pub(crate) fn parse_rooms(
    content: &str,
    format: RoomFileFormat,
) -> std::result::Result<Vec<RoomEntry>, String> {
    debug!(%format, bytes = content.len(), "Parsing rooms");
    match format {
        RoomFileFormat::Json => {
            let root: serde_json::Value =
                serde_json::from_str(content).map_err(|e| e.to_string())?;
            if root.is_array() {
                serde_json::from_str::<Vec<RoomEntry>>(content).map_err(|e| e.to_string())
            } else {
                serde_json::from_str::<RoomsDocument>(content)
                    .map(|doc| doc.rooms)
                    .map_err(|e| e.to_string())
            }
        }
        RoomFileFormat::Yaml => {
            let root: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            if root.is_sequence() {
                serde_yaml::from_str::<Vec<RoomEntry>>(content).map_err(|e| e.to_string())
            } else {
                serde_yaml::from_str::<RoomsDocument>(content)
                    .map(|doc| doc.rooms)
                    .map_err(|e| e.to_string())
            }
        }
        RoomFileFormat::Toml => toml::from_str::<RoomsDocument>(content)
            .map(|doc| doc.rooms)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
