/*!
 * Integration tests for the tokcount binary
 */

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn tokcount(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokcount"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_plain_count() {
    let output = tokcount(&["--format", "plain", "Hello", "world"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2");
}

#[test]
fn test_json_count_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prompt.md");
    fs::write(&path, "Hello world").unwrap();

    let output = tokcount(&["--format", "json", "-m", "gpt-4", "-f", path.to_str().unwrap()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["model"], "gpt-4");
    assert_eq!(value["provider"], "OpenAI");
    assert_eq!(value["token_count"], 2);
    assert_eq!(value["is_estimate"], false);
}

#[test]
fn test_table_count() {
    let output = tokcount(&["-m", "claude-3-opus", "Hello world"]);
    assert!(output.status.success());

    let rendered = stdout(&output);
    assert!(rendered.contains("Anthropic"));
    assert!(rendered.contains("≈ estimated"));
}

#[test]
fn test_unsupported_model_fails() {
    let output = tokcount(&["-m", "nonexistent-model", "Hello"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent-model"));
    assert!(stderr.contains("--list"));
}

#[test]
fn test_missing_input_fails() {
    let output = tokcount(&[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no input provided"));
}

#[test]
fn test_list_plain() {
    let output = tokcount(&["--list", "--format", "plain"]);
    assert!(output.status.success());

    let models = stdout(&output);
    let models: Vec<&str> = models.lines().collect();
    assert!(models.contains(&"gpt-4.1"));
    assert!(models.contains(&"gemini-1.5-flash"));
    assert!(models.contains(&"llama-3.1-8b"));
    assert!(models.contains(&"claude-3-5-sonnet"));
}

#[test]
fn test_list_json_marks_default() {
    let output = tokcount(&["-l", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["default_model"], "gpt-4.1");
    assert_eq!(value["providers"].as_array().unwrap().len(), 4);
}

#[test]
fn test_help_word() {
    let output = tokcount(&["help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}

#[test]
fn test_completions() {
    let output = tokcount(&["--generate", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("tokcount"));
}
