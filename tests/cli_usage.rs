use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stack-san-domains"))
}

#[test]
fn missing_stack_name_fails_before_any_query() {
    let output = bin().output().expect("run binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--stack-name"));
    assert!(!stderr.contains("GetResources"));
}

#[test]
fn empty_stack_name_is_a_usage_error() {
    let output = bin()
        .args(["--stack-name", ""])
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("GetResources"));
}

#[test]
fn help_lists_stack_name_flag() {
    let output = bin().arg("--help").output().expect("run binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--stack-name"));
}

#[test]
fn unresolvable_session_is_fatal_with_plain_diagnostics() {
    let output = bin()
        .env_clear()
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", "/nonexistent/aws/config")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/aws/credentials")
        .args(["--stack-name", "prod"])
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Building SAN domain report"));
    assert!(stderr.contains("Failed to load AWS session: no AWS region configured"));
    assert!(!stderr.contains("GetResources"));
    // stderr is a pipe here, so no colour codes
    assert!(!stderr.contains('\x1b'));
}
