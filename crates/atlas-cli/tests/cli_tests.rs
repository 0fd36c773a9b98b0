use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "location": {
        "name": "Spain",
        "capital": "Madrid",
        "subregion": "Southern Europe",
        "population": 47351567,
        "area": 505992.0,
        "latitude": 40.0,
        "longitude": -4.0,
        "timezones": ["UTC-05:00"],
        "languages": [{"name": "Spanish", "native_name": "Español"}]
    },
    "weather": {"temp": 21.5, "description": "clear sky",
                "wind_speed": 3.1, "visibility": 10000},
    "currency_rates": {"USD": "92.5123", "EUR": "2.005"},
    "news": [{"title": "A", "description": "B"}, {"title": "C"}],
    "timestamp": "2023-01-01T10:00:00Z"
}"#;

/// Helper function to create an isolated environment with a document file
fn create_cli_test_environment(document: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::write(temp_dir.path().join("location.json"), document).expect("Failed to write document");
    temp_dir
}

/// Helper function to create a Command with --no-color and an empty XDG config
fn atlas_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("atlas").expect("Failed to find atlas binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.arg("--no-color");
    cmd
}

fn document_arg(temp_dir: &TempDir) -> String {
    temp_dir.path().join("location.json").to_string_lossy().into_owned()
}

#[test]
fn test_cli_render_file() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["render", &document_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Параметр"))
        .stdout(predicate::str::contains("Население страны:  47.351.567 чел."))
        .stdout(predicate::str::contains("USD = 92.51 руб., EUR = 2.01 руб."))
        .stdout(predicate::str::contains("Скорость ветра:    3.1"))
        .stdout(predicate::str::contains("Новости:           1) \"A\". B"))
        .stdout(predicate::str::contains("2) \"C\"."));
}

#[test]
fn test_cli_render_stdin_by_default() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .write_stdin(DOCUMENT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Страна:            Spain"));
}

#[test]
fn test_cli_render_dash_reads_stdin() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["render", "-"])
        .write_stdin(DOCUMENT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Столица:           Madrid"));
}

#[test]
fn test_cli_offset_sign_ignored_by_default() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["render", &document_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("15:00:00 (UTC-05:00)"));
}

#[test]
fn test_cli_honor_offset_sign_flag() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["--honor-offset-sign", "render", &document_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("05:00:00 (UTC-05:00)"));
}

#[test]
fn test_cli_config_file_sets_offset_sign() {
    let temp_dir = create_cli_test_environment(DOCUMENT);
    let config_path = temp_dir.path().join("atlas.json");
    fs::write(&config_path, r#"{"offset_sign": "honor"}"#).unwrap();

    atlas_cmd(&temp_dir)
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "render",
            &document_arg(&temp_dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("05:00:00 (UTC-05:00)"));
}

#[test]
fn test_cli_xdg_config_is_picked_up() {
    let temp_dir = create_cli_test_environment(DOCUMENT);
    let config_dir = temp_dir.path().join("config").join("atlas");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), r#"{"offset_sign": "honor"}"#).unwrap();

    atlas_cmd(&temp_dir)
        .args(["render", &document_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("05:00:00 (UTC-05:00)"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp_dir = create_cli_test_environment(DOCUMENT);
    let config_path = temp_dir.path().join("atlas.json");
    fs::write(&config_path, r#"{"offset_sign": "sideways"}"#).unwrap();

    atlas_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "render", &document_arg(&temp_dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_malformed_timezone_fails_without_output() {
    let document = DOCUMENT.replace("UTC-05:00", "GMT+3");
    let temp_dir = create_cli_test_environment(&document);

    atlas_cmd(&temp_dir)
        .args(["render", &document_arg(&temp_dir)])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed timezone 'GMT+3'"));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["render", "/nonexistent/location.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load location info"));
}

#[test]
fn test_cli_check_valid_document() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .args(["check", &document_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: Spain"));
}

#[test]
fn test_cli_check_rejects_negative_area() {
    let document = DOCUMENT.replace("505992.0", "-1.0");
    let temp_dir = create_cli_test_environment(&document);

    atlas_cmd(&temp_dir)
        .args(["check", &document_arg(&temp_dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("location.area"));
}

#[test]
fn test_cli_schema_describes_document() {
    let temp_dir = create_cli_test_environment(DOCUMENT);

    atlas_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"currency_rates\""))
        .stdout(predicate::str::contains("\"timezones\""));
}
