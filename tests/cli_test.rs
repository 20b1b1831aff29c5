#![cfg(feature = "cli")]

use anyhow::Result;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const EXPECTED: &str = "Dias прошёл тест (возраст: 20)\n\
Timur найден, но возраст не подходит (возраст: 25)\n\
Sultan прошёл тест (возраст: 18)\n\
Ali не найден в словаре \n\
Amina найден, но возраст не подходит (возраст: 17)\n";

fn age_gate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_age-gate"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_expected_lines() -> Result<()> {
    let output = age_gate().output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}

#[test]
fn test_default_run_is_idempotent() -> Result<()> {
    let first = age_gate().output()?.stdout;
    let second = age_gate().output()?.stdout;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_range_from_config_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    config.write_all(b"[eligibility]\nmin_age = 17\nmax_age = 19\n")?;

    let output = age_gate()
        .arg("--config")
        .arg(config.path())
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.contains("Dias найден, но возраст не подходит (возраст: 20)"));
    assert!(stdout.contains("Amina прошёл тест (возраст: 17)"));
    Ok(())
}

#[test]
fn test_inverted_range_exits_with_config_error() -> Result<()> {
    let output = age_gate()
        .args(["--min-age", "30", "--max-age", "20"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_json_format_flag() -> Result<()> {
    let output = age_gate().args(["--format", "json"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 5);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap_or_default())?;
    assert_eq!(first, serde_json::json!({"name": "Dias", "outcome": "passed", "age": 20}));
    Ok(())
}

#[test]
fn test_flags_override_inverted_range_in_config_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    config.write_all(b"[eligibility]\nmin_age = 30\nmax_age = 20\n")?;

    let output = age_gate()
        .arg("--config")
        .arg(config.path())
        .args(["--min-age", "18", "--max-age", "24"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED);
    Ok(())
}
