//! Integration tests for the cjkspace CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn cjkspace() -> Command {
    Command::cargo_bin("cjkspace").unwrap()
}

#[test]
fn test_process_file_enhanced() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mixed-sample.txt"));

    cmd.assert()
        .success()
        .stdout("这 是 don't 应 该 被 分 开 的 测 试 100% 完 成\n");
}

#[test]
fn test_process_text_argument() {
    let mut cmd = cjkspace();
    cmd.arg("process").arg("--text").arg("I like中国");

    cmd.assert().success().stdout("I like 中 国\n");
}

#[test]
fn test_process_stdin() {
    let mut cmd = cjkspace();
    cmd.arg("process").write_stdin("测试100%完成");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains(" %").not());
}

#[test]
fn test_simple_mode_keep_newlines() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("newline-sample.txt"))
        .arg("--mode")
        .arg("simple")
        .arg("--keep-newlines");

    cmd.assert().success().stdout("你 好\nworld\n");
}

#[test]
fn test_simple_mode_replaces_newlines() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("newline-sample.txt"))
        .arg("-m")
        .arg("simple");

    cmd.assert().success().stdout("你 好 world\n");
}

#[test]
fn test_invalid_mode() {
    let mut cmd = cjkspace();
    cmd.arg("process").arg("-t").arg("中文").arg("-m").arg("fancy");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown spacing mode"));
}

#[test]
fn test_json_output() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mixed-sample.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"metadata\""))
        .stdout(predicate::str::contains("\"mode\": \"enhanced\""))
        .stdout(predicate::str::contains("\"protected_tokens\": 1"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-t")
        .arg("你好world")
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "你 好 world\n");
}

#[test]
fn test_unwritable_output_falls_back_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("no-such-dir").join("output.txt");

    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-t")
        .arg("你好world")
        .arg("-o")
        .arg(&output_file);

    cmd.assert()
        .failure()
        .stdout("你 好 world\n")
        .stderr(predicate::str::contains("Output unavailable"));
}

#[test]
fn test_glob_pattern_multiple_documents() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("*-sample.txt"))
        .arg("-q");

    // blank-sample.txt is skipped; the other two are processed in path order
    cmd.assert()
        .success()
        .stdout("这 是 don't 应 该 被 分 开 的 测 试 100% 完 成\n\n你 好 world\n");
}

#[test]
fn test_blank_input_rejected() {
    let mut cmd = cjkspace();
    cmd.arg("process").arg("-i").arg(fixture_path("blank-sample.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No text to process"));
}

#[test]
fn test_blank_stdin_rejected() {
    let mut cmd = cjkspace();
    cmd.arg("process").write_stdin("   \n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No text to process"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = cjkspace();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_input_and_text_conflict() {
    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mixed-sample.txt"))
        .arg("-t")
        .arg("中文");

    cmd.assert().failure();
}

#[test]
fn test_help_command() {
    let mut cmd = cjkspace();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("spacing between CJK characters"));
}

#[test]
fn test_list_modes() {
    let mut cmd = cjkspace();
    cmd.arg("list").arg("modes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("enhanced"));
}

#[test]
fn test_list_formats() {
    let mut cmd = cjkspace();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_config_file_selects_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("cjkspace.toml");
    fs::write(
        &config_file,
        "[spacing]\nmode = \"simple\"\nkeep_newlines = true\n",
    )
    .unwrap();

    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("newline-sample.txt"))
        .arg("-c")
        .arg(&config_file);

    cmd.assert().success().stdout("你 好\nworld\n");
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[spacing]\nprogress_interval = 0\n").unwrap();

    let mut cmd = cjkspace();
    cmd.arg("process").arg("-t").arg("中文").arg("-c").arg(&config_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("progress_interval"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("generated.toml");

    let mut cmd = cjkspace();
    cmd.arg("generate-config").arg("-o").arg(&config_file);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let mut cmd = cjkspace();
    cmd.arg("process")
        .arg("-t")
        .arg("I like中国")
        .arg("-c")
        .arg(&config_file);
    cmd.assert().success().stdout("I like 中 国\n");
}
