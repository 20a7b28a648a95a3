//! ルームデータ
//!
//! - `entry`: ルームカード 1 件分のデータ
//! - `list`: ルームの集合
//! - `loader`: 静的なルームファイルの読み込み

mod entry;
mod list;
mod loader;

pub use entry::RoomEntry;
pub use loader::{load_rooms, RoomFileFormat};
