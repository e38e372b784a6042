use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const JOBS: &str = r#"
- job:
    name: alpha
    publishers:
      - junit:
          results: out.xml
- job:
    name: beta
    publishers:
      - fingerprint:
          files: "*.jar"
"#;

fn pubxml(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubxml"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("PUBXML_OUTPUT_INDENT")
        .env_remove("PUBXML_OUTPUT_XML_DECLARATION")
        .env_remove("PUBXML_LOG_LEVEL")
        .env("PUBXML_CONSOLE_OUTPUT", "stderr");
    cmd
}

fn workspace_with_jobs() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("jobs.yaml"), JOBS).unwrap();
    dir
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    pubxml(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDS"))
        .stdout(predicate::str::contains("compile"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    pubxml(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_prints_sorted_action_names() {
    let dir = TempDir::new().unwrap();
    let output = pubxml(&dir).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 23);
    assert_eq!(names.first(), Some(&"aggregate-tests"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_compile_to_stdout() {
    let dir = workspace_with_jobs();
    pubxml(&dir)
        .args(["compile", "jobs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<testResults>out.xml</testResults>"))
        .stdout(predicate::str::contains("<targets>*.jar</targets>"))
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
}

#[test]
fn test_compile_to_output_dir() {
    let dir = workspace_with_jobs();
    pubxml(&dir)
        .args(["compile", "jobs.yaml", "--output-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha.xml"));

    let alpha = fs::read_to_string(dir.path().join("out/alpha.xml")).unwrap();
    assert!(alpha.contains("<hudson.tasks.junit.JUnitResultArchiver>"));
    let beta = fs::read_to_string(dir.path().join("out/beta.xml")).unwrap();
    assert!(beta.contains("<hudson.tasks.Fingerprinter>"));
}

#[test]
fn test_workspace_config_controls_layout() {
    let dir = workspace_with_jobs();
    fs::write(
        dir.path().join("pubxml.toml"),
        "[output]\nindent = 0\nxml_declaration = false\n",
    )
    .unwrap();
    pubxml(&dir)
        .args(["compile", "jobs.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<project><publishers>"));
}

#[test]
fn test_unknown_action_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("jobs.yaml"),
        "- job:\n    name: bad\n    publishers:\n      - teleport\n",
    )
    .unwrap();
    pubxml(&dir)
        .args(["compile", "jobs.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("teleport"));
}

#[test]
fn test_warnings_do_not_change_exit_code() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("jobs.yaml"),
        "- job:\n    name: warned\n    publishers:\n      - xunit:\n          types:\n            - fakeunit:\n                pattern: a.xml\n",
    )
    .unwrap();
    pubxml(&dir)
        .args(["compile", "jobs.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("fakeunit"))
        .stdout(predicate::str::contains("<xunit>"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = workspace_with_jobs();
    pubxml(&dir)
        .args(["compile", "jobs.yaml", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}
