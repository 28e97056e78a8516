use std::fs;
use std::path::Path;
use std::process::{Command, Output};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create an input directory with three numbered files:
///
/// ```text
/// tmp/
///   1    "word1"
///   2    "word2"
///   3    "word3"
/// ```
fn setup_input() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for n in 1..=3 {
        fs::write(dir.path().join(n.to_string()), format!("word{}", n)).unwrap();
    }
    dir
}

/// Run the binary with a config path that does not exist, so the user's own
/// configuration never leaks into a test.
fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_txtsearch"))
        .arg("--config")
        .arg(config_dir.join("none.toml"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn lists_matching_files_in_order() {
    let input = setup_input();
    let input_str = input.path().to_str().unwrap();

    let output = run(input.path(), &["-i", input_str, "word3", "WORD1"]);
    assert_eq!(output.status.code(), Some(0));

    let expected = format!(
        "total: 3  match: 2\n{}\n{}\n",
        input.path().join("1").display(),
        input.path().join("3").display()
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn case_sensitive_flag() {
    let input = setup_input();
    let input_str = input.path().to_str().unwrap();

    let output = run(input.path(), &["--input", input_str, "--cs", "WORD1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "total: 3  match: 0\n");
}

#[test]
fn config_can_enable_case_sensitivity() {
    let input = setup_input();
    let config = tempfile::tempdir().unwrap();
    let config_path = config.path().join("txtsearch.toml");
    fs::write(&config_path, "[search]\ncase_sensitive = true\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_txtsearch"))
        .arg("--config")
        .arg(&config_path)
        .arg("-i")
        .arg(input.path())
        .arg("WORD1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "total: 3  match: 0\n");
}

#[test]
fn ignore_case_overrides_config() {
    let input = setup_input();
    let config = tempfile::tempdir().unwrap();
    let config_path = config.path().join("txtsearch.toml");
    fs::write(&config_path, "[search]\ncase_sensitive = true\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_txtsearch"))
        .arg("--config")
        .arg(&config_path)
        .arg("-i")
        .arg(input.path())
        .arg("--ignore-case")
        .arg("WORD1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("total: 3  match: 1\n"));
}

// ---------------------------------------------------------------------------
// Copying
// ---------------------------------------------------------------------------

#[test]
fn copies_matches_into_new_directory() {
    let input = setup_input();
    let scratch = tempfile::tempdir().unwrap();
    let out_dir = scratch.path().join("out");

    let output = run(
        scratch.path(),
        &[
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
            "word2",
            "word3",
        ],
    );
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.starts_with("total: 3  match: 2\n"));
    assert!(text.contains(out_dir.to_str().unwrap()));

    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["2", "3"]);
    assert_eq!(fs::read_to_string(out_dir.join("2")).unwrap(), "word2");
}

#[test]
fn existing_output_directory_fails() {
    let input = setup_input();
    let out_dir = tempfile::tempdir().unwrap();

    let output = run(
        out_dir.path(),
        &[
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            out_dir.path().to_str().unwrap(),
            "word1",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!out_dir.path().join("1").exists());
}

#[test]
fn reuse_output_flag_allows_existing_directory() {
    let input = setup_input();
    let out_dir = tempfile::tempdir().unwrap();

    let output = run(
        out_dir.path(),
        &[
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            out_dir.path().to_str().unwrap(),
            "--reuse-output",
            "word1",
        ],
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(out_dir.path().join("1")).unwrap(),
        "word1"
    );
}

#[test]
fn reuse_output_into_input_directory_keeps_files() {
    let input = setup_input();
    let input_str = input.path().to_str().unwrap();

    let output = run(
        input.path(),
        &["-i", input_str, "-o", input_str, "--reuse-output", "word1"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("same file"));
    assert_eq!(fs::read_to_string(input.path().join("1")).unwrap(), "word1");
}

// ---------------------------------------------------------------------------
// Errors and usage
// ---------------------------------------------------------------------------

#[test]
fn missing_input_directory_fails() {
    let scratch = tempfile::tempdir().unwrap();
    let missing = scratch.path().join("missing");

    let output = run(scratch.path(), &["-i", missing.to_str().unwrap(), "word"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read directory"));
}

#[test]
fn missing_words_is_usage_error() {
    let input = setup_input();

    let output = run(input.path(), &["-i", input.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn missing_input_flag_is_usage_error() {
    let scratch = tempfile::tempdir().unwrap();

    let output = run(scratch.path(), &["word"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_zero() {
    let scratch = tempfile::tempdir().unwrap();

    let output = run(scratch.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--input"));
}
