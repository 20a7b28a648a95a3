//! フィルタ次元の定義

use std::fmt;

/// フィルタ次元
///
/// 閉じた列挙なので、次元を受け取る操作にエラーケースはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterDimension {
    Direct,
    Encrypted,
    Unread,
}

impl FilterDimension {
    /// 次元の数
    pub const COUNT: usize = 3;

    pub fn all() -> &'static [FilterDimension] {
        &[
            FilterDimension::Direct,
            FilterDimension::Encrypted,
            FilterDimension::Unread,
        ]
    }

    /// 表示用タイトル
    pub fn title(&self) -> &'static str {
        match self {
            FilterDimension::Direct => "Direct",
            FilterDimension::Encrypted => "Encrypted",
            FilterDimension::Unread => "Unread",
        }
    }

    /// 設定ファイル・ログで使う識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterDimension::Direct => "direct",
            FilterDimension::Encrypted => "encrypted",
            FilterDimension::Unread => "unread",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FilterDimension::Direct => 0,
            FilterDimension::Encrypted => 1,
            FilterDimension::Unread => 2,
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
