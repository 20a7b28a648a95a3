use super::*;
use crate::error::ErrorCode;
use crate::filter::FilterDimension;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// load_from
// ============================================================================

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.bindings.to_bindings().unwrap(), Bindings::default());
}

#[test]
fn partial_bindings_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[bindings]\nunread = \"n\"\n");

    let config = Config::load_from(&path).unwrap();
    let bindings = config.bindings.to_bindings().unwrap();
    assert_eq!(bindings.resolve('n'), Some(FilterDimension::Unread));
    assert_eq!(bindings.resolve('d'), Some(FilterDimension::Direct));
    assert_eq!(bindings.resolve('u'), None);
}

#[test]
fn relative_rooms_path_is_resolved_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "rooms = \"rooms.json\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rooms, Some(dir.path().join("rooms.json")));
}

#[test]
fn absolute_rooms_path_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "rooms = \"/srv/rooms.yaml\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rooms, Some(PathBuf::from("/srv/rooms.yaml")));
}

#[test]
fn unknown_key_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "colour = \"blue\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Cfg001);
}

#[test]
fn multi_char_binding_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[bindings]\ndirect = \"dd\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Cfg001);
}

#[test]
fn colliding_bindings_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[bindings]\nencrypted = \"d\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Cfg002);
}

// ============================================================================
// resolve_rooms
// ============================================================================

#[test]
fn argument_overrides_config_rooms() {
    let config = Config {
        rooms: Some(PathBuf::from("/from/config.json")),
        ..Config::default()
    };
    let resolved = config
        .resolve_rooms(Some(PathBuf::from("/from/arg.json")))
        .unwrap();
    assert_eq!(resolved, PathBuf::from("/from/arg.json"));
}

#[test]
fn no_rooms_anywhere_is_error() {
    let err = Config::default().resolve_rooms(None).unwrap_err();
    assert!(matches!(err, RoomListError::NoRoomFile));
}

#[test]
fn to_toml_round_trips_bindings() {
    let config = Config {
        rooms: Some(PathBuf::from("/srv/rooms.json")),
        bindings: BindingsConfig {
            direct: 'x',
            encrypted: 'y',
            unread: 'z',
        },
    };
    let text = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

// ============================================================================
// default_path（環境変数）
// ============================================================================

#[test]
#[serial]
fn env_var_overrides_default_path() {
    std::env::set_var(CONFIG_ENV, "/etc/roomlist.toml");
    assert_eq!(default_path(), Some(PathBuf::from("/etc/roomlist.toml")));
    std::env::remove_var(CONFIG_ENV);
}

#[test]
#[serial]
fn empty_env_var_falls_back_to_home() {
    std::env::set_var(CONFIG_ENV, "");
    let saved_home = std::env::var("HOME").ok();
    std::env::set_var("HOME", "/home/tester");

    assert_eq!(
        default_path(),
        Some(PathBuf::from("/home/tester/.roomlist/config.toml"))
    );

    std::env::remove_var(CONFIG_ENV);
    match saved_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
}

#[cfg(unix)]
#[test]
fn to_toml_non_utf8_rooms_path_is_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let config = Config {
        rooms: Some(PathBuf::from(OsStr::from_bytes(b"/srv/rooms-\xff.json"))),
        ..Config::default()
    };
    let err = config.to_toml().unwrap_err();
    assert!(matches!(err, RoomListError::TomlSerialize(_)));
    assert_eq!(err.code(), ErrorCode::Int001);
}
