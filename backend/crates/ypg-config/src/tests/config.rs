use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.session.latency_ms, eq(crate::DEFAULT_LATENCY_MS));
    assert_that!(config.session.storage_dir.as_str(), eq("storage"));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("ypg");
    let _dir = EnvGuard::set("YPG_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000

              [session]
              latency_ms = 0
              storage_dir = "state"

              [client]
              server_url = "http://portal.local:9000"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.session.latency_ms, eq(0));
    assert_that!(config.session.storage_dir.as_str(), eq("state"));
    assert_that!(
        config.client.server_url.as_str(),
        eq("http://portal.local:9000")
    );
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("YPG_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("YPG_SERVER_PORT", "7777");
    let _host = EnvGuard::set("YPG_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("YPG_LOG_COLORED", "false");
    let _file = EnvGuard::set("YPG_LOG_FILE", "portal.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(7777));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("portal.log")));
    assert_that!(config.bind_addr().as_str(), eq("0.0.0.0:7777"));
}

#[test]
#[serial]
fn given_log_file_with_directory_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("YPG_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_invalid_client_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("YPG_CLIENT_SERVER_URL", "portal.local:8000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_config_dir_when_storage_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("storage")));
}
