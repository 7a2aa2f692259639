use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _dir) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.bot.owner_id, eq(0));
    assert_that!(config.server.host, eq(crate::DEFAULT_HOST));
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(config.logging.colored, eq(true));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [bot]
              owner_id = 5180

              [server]
              port = 9000
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.bot.owner_id, eq(5180));
    assert_that!(config.server.port, eq(9000));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("GK_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _owner = EnvGuard::set("GK_BOT_OWNER_ID", "5180");
    let _host = EnvGuard::set("GK_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("GK_LOG_COLORED", "false");
    let _db = EnvGuard::set("GK_DATABASE_PATH", "users.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bot.owner_id, eq(5180));
    assert_that!(config.server.host, eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.database.path, eq("users.db"));
}

#[test]
#[serial]
fn given_database_path_when_resolved_then_joined_to_config_dir() {
    // Given
    let (temp, _dir) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME)));
}

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_default() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"shouty\"",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}
