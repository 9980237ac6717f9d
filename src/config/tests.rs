use super::*;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::scoring::MatchMethod;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_vismatch_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("VISMATCH_DATA_PATH");
        env::remove_var("VISMATCH_MATCH_METHOD");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.data_path, PathBuf::from("./data/words.json"));
    assert_eq!(config.match_method, MatchMethod::MaxAvg);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_vismatch_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.data_path, PathBuf::from("./data/words.json"));
    assert_eq!(config.match_method, MatchMethod::MaxAvg);
}

#[test]
#[serial]
fn test_from_env_custom_data_path() {
    clear_vismatch_env();

    with_env_vars(&[("VISMATCH_DATA_PATH", "/tmp/custom.json")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.data_path, PathBuf::from("/tmp/custom.json"));
    });
}

#[test]
#[serial]
fn test_from_env_custom_match_method() {
    clear_vismatch_env();

    with_env_vars(&[("VISMATCH_MATCH_METHOD", "MAXMAX")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.match_method, MatchMethod::MaxMax);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_match_method() {
    clear_vismatch_env();

    with_env_vars(&[("VISMATCH_MATCH_METHOD", "nearest")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMatchMethod { .. }));
    });
}

#[test]
fn test_validate_missing_path() {
    let config = Config {
        data_path: PathBuf::from("/nonexistent/words.json"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_directory_is_not_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        data_path: dir.path().to_path_buf(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_existing_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"{}").expect("write");

    let config = Config {
        data_path: file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}
