// tests/config_loading.rs

mod common;
use crate::common::{init_tracing, TestResult};

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use shellcmd::config::{load_and_validate, load_from_path};
use shellcmd::errors::ShellCmdError;
use shellcmd::types::CommandDefinition;
use shellcmd_test_utils::builders::{CommandConfigBuilder, ConfigFileBuilder};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn expect_config_error(contents: &str) -> String {
    let file = write_config(contents);
    match load_and_validate(file.path()) {
        Err(ShellCmdError::ConfigError(msg)) => msg,
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(cfg) => panic!("Expected error, got Ok({:?})", cfg),
    }
}

#[test]
fn demo_config_loads_with_defaults() -> TestResult {
    init_tracing();

    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("demos/shell_commands.toml"))?;

    let names: Vec<_> = cfg.shell_command.keys().cloned().collect();
    assert_eq!(names, vec!["backup_config", "disk_usage", "hello"]);

    assert_eq!(
        cfg.definition("hello"),
        Some(CommandDefinition {
            name: "hello".to_string(),
            command: "echo hello".to_string(),
            timeout_secs: 2.0,
            verbose: true,
        })
    );

    // Integer timeouts are accepted.
    let backup = cfg.definition("backup_config").unwrap();
    assert_eq!(backup.timeout_secs, 30.0);
    assert!(!backup.verbose);

    Ok(())
}

#[test]
fn raw_load_does_not_validate() -> TestResult {
    init_tracing();

    let file = write_config(
        r#"
[shell_command.empty]
command = ""
timeout = -3
"#,
    );

    let raw = load_from_path(file.path())?;
    assert_eq!(raw.shell_command["empty"].timeout, -3.0);
    assert!(load_and_validate(file.path()).is_err());

    Ok(())
}

#[test]
fn negative_timeout_is_rejected() {
    init_tracing();

    let msg = expect_config_error(
        r#"
[shell_command.slow]
command = "sleep 1"
timeout = -0.5
"#,
    );
    assert!(msg.contains("slow"));
    assert!(msg.contains("timeout"));
}

#[test]
fn command_without_words_is_rejected() {
    init_tracing();

    let msg = expect_config_error(
        r#"
[shell_command.blank]
command = "   "
"#,
    );
    assert!(msg.contains("blank"));
    assert!(msg.contains("executable"));
}

#[test]
fn unbalanced_quote_in_command_is_rejected() {
    init_tracing();

    let msg = expect_config_error(
        r#"
[shell_command.quote]
command = "echo \"unterminated"
"#,
    );
    assert!(msg.contains("no closing quotation"));
}

#[test]
fn config_without_commands_is_rejected() {
    init_tracing();

    let msg = expect_config_error("# nothing here\n");
    assert!(msg.contains("at least one"));
}

#[test]
fn whitespace_in_name_is_rejected() {
    init_tracing();

    let msg = expect_config_error(
        r#"
[shell_command."two words"]
command = "true"
"#,
    );
    assert!(msg.contains("whitespace"));
}

#[test]
fn missing_command_key_is_a_toml_error() {
    init_tracing();

    let file = write_config(
        r#"
[shell_command.nothing]
timeout = 1.0
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ShellCmdError::TomlError(_))
    ));
}

#[test]
fn unknown_keys_are_a_toml_error() {
    init_tracing();

    let file = write_config(
        r#"
[shell_command.typo]
command = "true"
timout = 1.0
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(ShellCmdError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();

    let result = load_and_validate("/definitely/not/here/shell_commands.toml");
    assert!(matches!(result, Err(ShellCmdError::IoError(_))));
}

#[test]
fn builder_configs_go_through_the_same_validation() {
    init_tracing();

    let cfg = ConfigFileBuilder::new()
        .with_command("ok", CommandConfigBuilder::new("echo ok").timeout(0.0).build())
        .build();
    assert_eq!(cfg.definition("ok").unwrap().timeout_secs, 0.0);

    let err = ConfigFileBuilder::new()
        .with_command("bad", CommandConfigBuilder::new("echo").timeout(f64::NAN).build())
        .try_build();
    assert!(err.is_err());
}
