//! ルームカードのデータ

use crate::filter::{FilterDimension, Tagged};
use serde::{Deserialize, Serialize};

/// ルーム一覧の 1 エントリ
///
/// タグ（`is_direct` / `is_encrypted` / `unread_count`）が欠けている場合は
/// `false`（未読 0）として扱う。`Require` には一致せず、`Exclude` には違反しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    /// ルーム ID
    pub id: String,

    /// 表示名
    pub name: String,

    /// アバター URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// ダイレクトメッセージか
    #[serde(default)]
    pub is_direct: bool,

    /// 暗号化されているか
    #[serde(default)]
    pub is_encrypted: bool,

    /// 未読メッセージ数
    #[serde(default)]
    pub unread_count: u64,
}

/// テスト用ビルダー
#[cfg(test)]
impl RoomEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            is_direct: false,
            is_encrypted: false,
            unread_count: 0,
        }
    }

    pub fn with_direct(mut self, is_direct: bool) -> Self {
        self.is_direct = is_direct;
        self
    }

    pub fn with_encrypted(mut self, is_encrypted: bool) -> Self {
        self.is_encrypted = is_encrypted;
        self
    }

    pub fn with_unread_count(mut self, count: u64) -> Self {
        self.unread_count = count;
        self
    }
}

impl RoomEntry {
    /// 未読があるか
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// アバター代わりに表示する名前の先頭文字
    pub fn name_initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

impl Tagged for RoomEntry {
    fn tag(&self, dimension: FilterDimension) -> bool {
        match dimension {
            FilterDimension::Direct => self.is_direct,
            FilterDimension::Encrypted => self.is_encrypted,
            FilterDimension::Unread => self.has_unread(),
        }
    }
}
