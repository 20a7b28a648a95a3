//! フィルタトリガーの登録
//!
//! トリガーキーとフィルタ次元の対応を明示的に登録し、
//! キー入力を `FilterController::toggle` の呼び出しに変換する。

use crate::controller::FilterController;
use crate::error::{Result, RoomListError};
use crate::filter::FilterDimension;
use std::collections::BTreeMap;

/// ナビゲーション用に予約済みのキー
pub const RESERVED_KEYS: &[char] = &['q', 'j', 'k'];

/// キー → フィルタ次元 の対応表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    keys: BTreeMap<char, FilterDimension>,
}

impl Default for Bindings {
    /// d: direct / e: encrypted / u: unread
    fn default() -> Self {
        let mut keys = BTreeMap::new();
        keys.insert('d', FilterDimension::Direct);
        keys.insert('e', FilterDimension::Encrypted);
        keys.insert('u', FilterDimension::Unread);
        Self { keys }
    }
}

impl Bindings {
    /// 何も登録されていない対応表
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// 3 次元分のキーから対応表を作成
    pub fn from_keys(direct: char, encrypted: char, unread: char) -> Result<Self> {
        let mut bindings = Self::empty();
        bindings.register(direct, FilterDimension::Direct)?;
        bindings.register(encrypted, FilterDimension::Encrypted)?;
        bindings.register(unread, FilterDimension::Unread)?;
        Ok(bindings)
    }

    /// キーを次元に登録
    ///
    /// 予約キー、登録済みのキー、既にキーを持つ次元はエラー。
    pub fn register(&mut self, key: char, dimension: FilterDimension) -> Result<()> {
        if RESERVED_KEYS.contains(&key) {
            return Err(RoomListError::InvalidBinding(format!(
                "'{}' is reserved for navigation",
                key
            )));
        }
        if let Some(existing) = self.keys.get(&key) {
            return Err(RoomListError::InvalidBinding(format!(
                "'{}' is already bound to {}",
                key, existing
            )));
        }
        if let Some(existing_key) = self.key_for(dimension) {
            return Err(RoomListError::InvalidBinding(format!(
                "{} is already bound to '{}'",
                dimension, existing_key
            )));
        }
        self.keys.insert(key, dimension);
        Ok(())
    }

    pub fn resolve(&self, key: char) -> Option<FilterDimension> {
        self.keys.get(&key).copied()
    }

    pub fn key_for(&self, dimension: FilterDimension) -> Option<char> {
        self.keys
            .iter()
            .find(|(_, d)| **d == dimension)
            .map(|(k, _)| *k)
    }

    /// キーに対応する次元をトグルする。登録されていないキーなら何もしない
    pub fn dispatch(&self, key: char, controller: &mut FilterController) -> bool {
        match self.resolve(key) {
            Some(dimension) => {
                controller.toggle(dimension);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, FilterDimension)> + '_ {
        self.keys.iter().map(|(k, d)| (*k, *d))
    }
}

#[cfg(test)]
#[path = "bindings_test.rs"]
mod tests;
