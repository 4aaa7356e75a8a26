use std::fs;
use std::path::PathBuf;
use std::process::Output;

use tempfile::TempDir;

fn sigparse(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_sigparse"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sigparse")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Console config that captures output in memory and never prompts.
fn write_buffered_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("console.yaml");
    fs::write(
        &path,
        "output: buffered\ndecorated: false\ninteractive: false\n",
    )
    .expect("failed to write console config");
    path
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_definition_as_json() {
    let output = sigparse(&[
        "parse",
        "mail:send {user : The user id} {--Q|queue=} {--tags=*a,b}",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["name"], "mail:send");
    assert_eq!(json["arguments"][0]["name"], "user");
    assert_eq!(json["arguments"][0]["required"], true);
    assert_eq!(json["arguments"][0]["description"], "The user id");
    assert_eq!(json["options"][0]["shortcut"], "Q");
    assert_eq!(json["options"][0]["value_mode"], "optional_scalar");
    assert_eq!(json["options"][1]["default"], serde_json::json!(["a", "b"]));
}

#[test]
fn parse_reads_signatures_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signatures.txt");
    fs::write(&path, "# commands\nmail:send {user}\n\nacme:command {--force}\n").unwrap();

    let output = sigparse(&["parse", "--file", path.to_str().unwrap(), "--format", "yaml"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("name: mail:send"));
    assert!(text.contains("name: acme:command"));
}

#[test]
fn parse_markdown_format() {
    let output = sigparse(&["parse", "copy {source} {--F|force}", "--format", "markdown"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("# copy"));
    assert!(text.contains("## Arguments"));
    assert!(text.contains("`-F, --force`"));
}

#[test]
fn parse_blank_signature_fails() {
    let output = sigparse(&["parse", "   "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unable to determine command name from signature"));
}

#[test]
fn parse_without_signatures_fails() {
    let output = sigparse(&["parse"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Specify at least one signature"));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_well_formed_signatures() {
    let output = sigparse(&["validate", "mail:send {user} {--queue=}", "acme {files?*}"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Validated 2 signature(s)."));
}

#[test]
fn validate_reports_structural_errors() {
    let output = sigparse(&["validate", "mail:send {user}", "copy {files*} {target}"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("copy: "));
    assert!(err.contains("1 of 2 signature(s) failed validation"));
    assert!(stdout(&output).contains("ok: mail:send"));
}

// ---------------------------------------------------------------------------
// try
// ---------------------------------------------------------------------------

#[test]
fn try_binds_arguments_as_json() {
    let output = sigparse(&[
        "try",
        "--json",
        "acme:command {required_argument} {optional_argument?} {argument_with_value=default} \
         {--O|option} {--OWV|option_with_value=} {--OWDV|option_with_default=default}",
        "--",
        "value",
        "--option",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["command"], "acme:command");
    assert_eq!(
        json["arguments"],
        serde_json::json!([
            ["required_argument", "value"],
            ["optional_argument", null],
            ["argument_with_value", "default"]
        ])
    );
    assert_eq!(
        json["options"],
        serde_json::json!([
            ["option", true],
            ["option_with_value", null],
            ["option_with_default", "default"]
        ])
    );
}

#[test]
fn try_renders_tables_through_buffered_output() {
    let dir = TempDir::new().unwrap();
    let config = write_buffered_config(&dir);

    let output = sigparse(&[
        "try",
        "--config",
        config.to_str().unwrap(),
        "tag {names*} {--label=*}",
        "--",
        "a",
        "b",
        "--label",
        "x",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("tag\n===\n"));
    assert!(text.contains("Arguments\n---------\n"));
    assert!(text.contains("[a, b]"));
    assert!(text.contains("[x]"));
    assert!(!text.contains("verbosity:"));
}

#[test]
fn try_verbose_flag_is_applied() {
    let dir = TempDir::new().unwrap();
    let config = write_buffered_config(&dir);

    let output = sigparse(&[
        "try",
        "--config",
        config.to_str().unwrap(),
        "cmd",
        "--",
        "-v",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("verbosity: v"));
}

#[test]
fn try_keeps_configured_verbosity_without_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("console.yaml");
    fs::write(&path, "verbosity: v\noutput: buffered\ndecorated: false\n").unwrap();

    let output = sigparse(&["try", "--config", path.to_str().unwrap(), "cmd"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("verbosity: v"));
}

#[test]
fn try_help_prints_command_help() {
    let dir = TempDir::new().unwrap();
    let config = write_buffered_config(&dir);

    let output = sigparse(&[
        "try",
        "--config",
        config.to_str().unwrap(),
        "mail:send {user : The user id} {--queue= : Queue name}",
        "--",
        "--help",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("The user id"));
    assert!(text.contains("--queue"));
}

#[test]
fn try_missing_required_argument_fails() {
    let output = sigparse(&["try", "mail:send {user}"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "));
}

#[test]
fn try_reserved_option_name_fails() {
    let output = sigparse(&["try", "cmd {--verbose}"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("reserved"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "output: [").unwrap();

    let output = sigparse(&["try", "--config", path.to_str().unwrap(), "cmd"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config"));
}
