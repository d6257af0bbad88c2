//! Runs the `xenctl` binary and checks exit codes and where output goes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const STATE: &str = r#"
[[domains]]
id = 5
name = "web"

[[partitions]]
name = "disk0"

[[grants]]
domain = 5
partition = "disk0"
mode = "READ"
"#;

fn xenctl(dir: &Path, words: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xenctl"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("XENCTL_STATE_FILE")
        .env_remove("XENCTL_GRANT_MODE")
        .env_remove("XENCTL_STRICT_REVOKE")
        .arg("--state")
        .arg(dir.join("state.toml"))
        .args(words)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn exit_codes_follow_failure_kind() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("state.toml"), STATE).unwrap();

    let missing_domain = xenctl(dir.path(), &["physical", "revoke", "-pdisk0"]);
    assert_eq!(missing_domain.status.code(), Some(2));
    assert!(stdout(&missing_domain).is_empty());
    let err = stderr(&missing_domain);
    assert!(err.contains("Expected -n<domain_id>"), "{err}");
    assert!(
        err.contains("Usage: xenctl physical revoke -n<domain_id> -p<partition_name>"),
        "{err}"
    );

    let revoked = xenctl(dir.path(), &["physical", "revoke", "-n5", "-pdisk0"]);
    assert_eq!(revoked.status.code(), Some(0));
    assert!(stdout(&revoked).is_empty());

    let again = xenctl(dir.path(), &["physical", "revoke", "-n5", "-pdisk0"]);
    assert_eq!(again.status.code(), Some(1));
    let err = stderr(&again);
    assert!(err.contains("Domain 5 has no access to partition disk0"), "{err}");
    assert!(!err.contains("Usage:"), "{err}");
}

#[test]
fn results_go_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("state.toml"), STATE).unwrap();

    let listed = xenctl(dir.path(), &["physical", "list", "-n5"]);
    assert_eq!(listed.status.code(), Some(0));
    assert!(stdout(&listed).contains("disk0"));
}

#[test]
fn missing_config_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = xenctl(dir.path(), &["--config", "absent.toml", "domain", "list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to load configuration"));
}
