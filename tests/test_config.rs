use std::path::Path;
use std::time::Duration;

use fly_fighter::config::*;

fn parse(contents: &str) -> Result<Config, ConfigError> {
    Config::from_toml(contents, Path::new("fly_fighter.toml"))
}

#[test]
fn empty_file_gives_defaults() {
    let config = parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.fps, 60);
    assert!(!config.bell);
    assert_eq!(config.seed, None);
}

#[test]
fn fields_are_read() {
    let config = parse("fps = 30\nbell = true\nseed = 7\n").unwrap();
    assert_eq!(config.fps, 30);
    assert!(config.bell);
    assert_eq!(config.seed, Some(7));
}

#[test]
fn fps_is_clamped() {
    assert_eq!(parse("fps = 1000").unwrap().fps, 240);
    assert_eq!(parse("fps = 0").unwrap().fps, 10);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let err = parse("fps = \"fast\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("fly_fighter.toml"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Config::load_from_file(Path::new("/nonexistent/fly_fighter.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn frame_duration_follows_fps() {
    let config = Config { fps: 50, ..Config::default() };
    assert_eq!(config.frame_duration(), Duration::from_millis(20));
}
