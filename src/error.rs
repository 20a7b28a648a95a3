mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

use crate::room::RoomFileFormat;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// roomlist 統一エラー型
#[derive(Debug, Error)]
pub enum RoomListError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {format} room file {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: RoomFileFormat,
        message: String,
    },

    #[error("Duplicate room id {id} in {}", path.display())]
    DuplicateRoom { path: PathBuf, id: String },

    #[error("Unsupported room file format: {}. Expected .json, .toml, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("No room file given. Pass --rooms <FILE> or set `rooms` in the config file")]
    NoRoomFile,

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid key binding: {0}")]
    InvalidBinding(String),

    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RoomListError>;

impl RoomListError {
    /// エラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            RoomListError::Read { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorCode::Io001,
                _ => ErrorCode::Io002,
            },
            RoomListError::Parse { .. } | RoomListError::DuplicateRoom { .. } => ErrorCode::Dat001,
            RoomListError::UnsupportedFormat(_) => ErrorCode::Dat002,
            RoomListError::NoRoomFile => ErrorCode::Val001,
            RoomListError::Config { .. } => ErrorCode::Cfg001,
            RoomListError::InvalidBinding(_) => ErrorCode::Cfg002,
            RoomListError::Terminal(_) => ErrorCode::Tui001,
            RoomListError::Json(_) | RoomListError::TomlSerialize(_) => ErrorCode::Int001,
        }
    }

    /// CLI 表示用の RichError に変換
    pub fn into_rich(self) -> RichError {
        let code = self.code();
        let message = self.to_string();
        match self {
            RoomListError::Read { path, source } => RichError::new(code, message)
                .with_context(ErrorContext::new().with_file_path(path))
                .with_source(source),
            RoomListError::Parse { path, format, .. } => RichError::new(code, message)
                .with_context(
                    ErrorContext::new()
                        .with_file_path(path)
                        .with_additional("format", format.to_string()),
                ),
            RoomListError::DuplicateRoom { path, id } => RichError::new(code, message)
                .with_context(ErrorContext::new().with_file_path(path).with_room_id(id)),
            RoomListError::UnsupportedFormat(path)
            | RoomListError::Config { path, .. } => {
                RichError::new(code, message).with_context(ErrorContext::new().with_file_path(path))
            }
            RoomListError::Terminal(source) => RichError::new(code, message).with_source(source),
            RoomListError::Json(source) => RichError::new(code, message).with_source(source),
            RoomListError::TomlSerialize(source) => {
                RichError::new(code, message).with_source(source)
            }
            RoomListError::NoRoomFile | RoomListError::InvalidBinding(_) => {
                RichError::new(code, message)
            }
        }
    }
}
