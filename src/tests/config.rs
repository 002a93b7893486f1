use super::Config;
use crate::error::Error;
use std::io::Write;
use std::path::MAIN_SEPARATOR;
use tempfile::NamedTempFile;

#[test]
fn test_default_uses_platform_separator() {
    let cfg = Config::default();

    assert_eq!(cfg.separator, MAIN_SEPARATOR.to_string());
    assert!(cfg.pretty);
    assert_eq!(cfg.separator().unwrap(), MAIN_SEPARATOR);
}

#[test]
fn test_load_from_file_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"separator = "\\""#).unwrap();
    writeln!(file, "pretty = false").unwrap();

    let cfg = Config::load_from(file.path()).unwrap();

    assert_eq!(cfg.separator, "\\");
    assert_eq!(cfg.separator().unwrap(), '\\');
    assert!(!cfg.pretty);
}

#[test]
fn test_load_from_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();

    let cfg = Config::load_from(file.path()).unwrap();

    assert_eq!(cfg, Config::default());
}

#[test]
fn test_load_from_partial_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pretty = false").unwrap();

    let cfg = Config::load_from(file.path()).unwrap();

    assert_eq!(cfg.separator, MAIN_SEPARATOR.to_string());
    assert!(!cfg.pretty);
}

#[test]
fn test_load_from_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "separator = [").unwrap();

    match Config::load_from(file.path()) {
        Err(Error::Config { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("Expected a config error, got {other:?}"),
    }
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::load_from(&dir.path().join("tocprune.toml"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_separator_must_be_one_char() {
    for bad in ["", "ab", "//"] {
        let cfg = Config {
            separator: bad.to_string(),
            ..Config::default()
        };
        assert!(
            matches!(cfg.separator(), Err(Error::InvalidSeparator(ref s)) if s == bad),
            "Separator {bad:?} should be rejected"
        );
    }
}

#[test]
fn test_overrides_replace_loaded_settings() {
    let cfg = Config::default().with_overrides(Some("\\".to_string()), true);

    assert_eq!(cfg.separator().unwrap(), '\\');
    assert!(!cfg.pretty);
}

#[test]
fn test_absent_overrides_keep_loaded_settings() {
    let loaded = Config {
        separator: "/".to_string(),
        pretty: false,
    };

    assert_eq!(loaded.clone().with_overrides(None, false), loaded);
}
