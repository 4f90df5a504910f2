use crate::{Config, LogLevel};
use crate::tests::{EnvGuard, setup_config_dir};

use std::str::FromStr;

use log::LevelFilter;
use serial_test::serial;

#[test]
fn test_known_levels_parse_case_insensitively() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_unknown_level_defaults_to_info() {
    assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Info);
}

#[test]
#[serial]
fn given_level_in_toml_when_load_then_applied() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"trace\"\n",
    )
    .unwrap();

    let config = Config::load().unwrap();

    assert_eq!(*config.logging.level, LevelFilter::Trace);
}

#[test]
#[serial]
fn given_level_env_override_when_load_then_applied() {
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("YPG_LOG_LEVEL", "error");

    let config = Config::load().unwrap();

    assert_eq!(*config.logging.level, LevelFilter::Error);
}
