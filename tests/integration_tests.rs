//! Integration tests for the SurfCast CLI

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary inside `dir` with no credential and no user config in reach
fn run_isolated(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_surfcast"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("STORMGLASS_API_KEY")
        .env_remove("SURFCAST_STORMGLASS__API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run_isolated(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("choose your beach"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--date"));
}

/// A missing credential aborts before any request with exit code 1
#[test]
fn test_missing_api_key_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_isolated(dir.path(), &["--date", "2025-07-04"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("STORMGLASS_API_KEY"), "got: {stderr}");
    assert!(output.stdout.is_empty());
}

/// Malformed dates are rejected by argument parsing
#[test]
fn test_invalid_date_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run_isolated(dir.path(), &["--date", "tomorrow"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tomorrow"));
}

/// Every beach failing to fetch is reported per beach and ends with exit code 1
#[test]
fn test_all_fetches_failing_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("surfcast.toml");
    fs::write(
        &config_path,
        r#"
[stormglass]
api_key = "integration-test-key"
base_url = "http://127.0.0.1:9/v2/weather/point"
timeout_seconds = 2

[[beaches]]
name = "Iguape"
latitude = -4.0791
longitude = -38.4503

[[beaches]]
name = "Paracuru"
latitude = -3.4146
longitude = -39.0300
"#,
    )
    .unwrap();

    let output = run_isolated(
        dir.path(),
        &["--config", config_path.to_str().unwrap(), "--date", "2025-07-04"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching Iguape"), "got: {stderr}");
    assert!(stderr.contains("Error fetching Paracuru"), "got: {stderr}");
    assert!(stderr.contains("Failed to retrieve any forecasts."));
    assert!(output.stdout.is_empty());
}

/// An invalid configuration file is a configuration error
#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("surfcast.toml");
    fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let output = run_isolated(dir.path(), &["--config", config_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level"), "got: {stderr}");
}

/// Fetch failures reach stderr even when logging is turned down to errors only
#[test]
fn test_fetch_failures_shown_with_quiet_logging() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("surfcast.toml");
    fs::write(
        &config_path,
        r#"
[stormglass]
api_key = "integration-test-key"
base_url = "http://127.0.0.1:9/v2/weather/point"
timeout_seconds = 2

[logging]
level = "error"

[[beaches]]
name = "Taíba"
latitude = -3.5480
longitude = -38.8929
"#,
    )
    .unwrap();

    let output = run_isolated(
        dir.path(),
        &["--config", config_path.to_str().unwrap(), "--date", "2025-07-04"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching Taíba: "), "got: {stderr}");
    assert_eq!(stderr.matches("Error fetching").count(), 1, "got: {stderr}");
    assert!(stderr.contains("Failed to retrieve any forecasts."));
}
