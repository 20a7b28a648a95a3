//! ルームの集合

use super::entry::RoomEntry;

/// ルーム一覧
#[derive(Debug, Clone, Default)]
pub struct RoomList {
    pub rooms: Vec<RoomEntry>,
}

impl RoomList {
    /// 表示名でソート（大文字小文字を区別しない）
    pub fn sort_by_display_names(&mut self) {
        self.rooms.sort_by_cached_key(|room| room.name.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn into_rooms(self) -> Vec<RoomEntry> {
        self.rooms
    }
}

impl From<Vec<RoomEntry>> for RoomList {
    fn from(rooms: Vec<RoomEntry>) -> Self {
        Self { rooms }
    }
}
