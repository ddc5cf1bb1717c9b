//! Integration tests for CLI behavior
//!
//! These tests run the built binary against small projects in temporary
//! directories and check output and exit codes.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const ONLY_FIRST_LINE_HEADING: &str = r#"{"config": {"default": false, "MD041": true}}"#;

fn marklint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_marklint"))
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".marklint.json", config);
    dir
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        marklint_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        marklint_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod lint_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_file_exits_zero() {
        let dir = project(ONLY_FIRST_LINE_HEADING);
        write(dir.path(), "README.md", "# Title\n\nBody.\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "README.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issue(s)"));
    }

    #[test]
    fn error_violation_exits_one() {
        let dir = project(ONLY_FIRST_LINE_HEADING);
        write(dir.path(), "README.md", "Not a heading\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "README.md"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("README.md:1:1: error [MD041]"));
    }

    #[test]
    fn warning_only_exits_zero() {
        let dir = project(r#"{"config": {"default": false, "MD041": "warning"}}"#);
        write(dir.path(), "README.md", "Not a heading\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "README.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("warning [MD041]"));
    }

    #[test]
    fn json_output_records() {
        let dir = project(ONLY_FIRST_LINE_HEADING);
        write(dir.path(), "README.md", "Not a heading\n");

        let output = marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "--format", "json", "README.md"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["rule"], "MD041");
        assert_eq!(records[0]["line"], 1);
        assert_eq!(records[0]["column"], 1);
        assert_eq!(records[0]["severity"], "error");
        assert!(records[0]["file"].as_str().unwrap().ends_with("README.md"));
    }

    #[test]
    fn walks_directories_and_honours_ignores() {
        let dir = project(
            r#"{"config": {"default": false, "MD041": true}, "ignores": ["vendor/**"]}"#,
        );
        write(dir.path(), "docs/a.md", "no heading\n");
        write(dir.path(), "vendor/b.md", "no heading\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "."])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("a.md:1:1"))
            .stdout(predicate::str::contains("b.md").not());
    }

    #[test]
    fn stdin_uses_stdin_identifier() {
        let dir = project(ONLY_FIRST_LINE_HEADING);

        marklint_cmd()
            .current_dir(dir.path())
            .args(["lint", "--stdin"])
            .write_stdin("Not a heading\n")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("stdin:1:1: error [MD041]"));
    }

    #[test]
    fn stdin_fix_prints_fixed_source() {
        let dir = project(r#"{"config": {"default": false, "MD018": true, "MD047": true}}"#);

        marklint_cmd()
            .current_dir(dir.path())
            .args(["lint", "--stdin", "--fix"])
            .write_stdin("#Title")
            .assert()
            .success()
            .stdout("# Title\n");
    }

    #[test]
    fn fix_rewrites_files() {
        let dir = project(r#"{"config": {"default": false, "MD009": true, "MD047": true}}"#);
        let path = write(dir.path(), "a.md", "# Title\n\ntext   ");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "--fix", "a.md"])
            .assert()
            .success();

        assert_eq!(fs::read_to_string(path).unwrap(), "# Title\n\ntext\n");
    }

    #[test]
    fn explicit_config_flag() {
        let dir = TempDir::new().unwrap();
        let config = write(dir.path(), "conf/lint.yaml", "config:\n  default: false\n  MD041: true\n");
        write(dir.path(), "a.md", "text\n");

        marklint_cmd()
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config)
            .args(["--no-cache", "lint", "a.md"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[MD041]"));
    }

    #[test]
    fn missing_path_exits_two() {
        let dir = project(ONLY_FIRST_LINE_HEADING);

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "nonexistent_file.md"])
            .assert()
            .code(2);
    }

    #[test]
    fn missing_path_does_not_stop_other_files() {
        let dir = project(ONLY_FIRST_LINE_HEADING);
        write(dir.path(), "good.md", "Not a heading\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "missing.md", "good.md"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("good.md:1:1: error [MD041]"))
            .stderr(predicate::str::contains("missing.md"));
    }

    #[test]
    fn overrides_match_from_any_working_directory() {
        let dir = project(
            r#"{
                "config": {"default": false, "MD041": true},
                "overrides": [{"files": ["docs/**"], "config": {"MD041": false}}]
            }"#,
        );
        write(dir.path(), "docs/a.md", "Not a heading\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "docs/a.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issue(s)"));

        marklint_cmd()
            .current_dir(dir.path().join("docs"))
            .args(["--no-cache", "lint", "a.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issue(s)"));
    }

    #[test]
    fn ignores_match_from_any_working_directory() {
        let dir = project(
            r#"{"config": {"default": false, "MD041": true}, "ignores": ["vendor/*.md"]}"#,
        );
        write(dir.path(), "vendor/b.md", "no heading\n");

        marklint_cmd()
            .current_dir(dir.path().join("vendor"))
            .args(["--no-cache", "lint", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 file(s)"));
    }

    #[test]
    fn circular_extends_exits_two() {
        let dir = project(r#"{"extends": "other.json"}"#);
        write(dir.path(), "other.json", r#"{"extends": ".marklint.json"}"#);
        write(dir.path(), "a.md", "# A\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "a.md"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Circular extends"));
    }

    #[test]
    fn second_run_uses_cache() {
        let dir = project(ONLY_FIRST_LINE_HEADING);
        write(dir.path(), "README.md", "# Title\n");

        marklint_cmd()
            .current_dir(dir.path())
            .args(["lint", "README.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(0 from cache)"));

        assert!(dir.path().join(".marklint-cache.json").is_file());

        marklint_cmd()
            .current_dir(dir.path())
            .args(["lint", "README.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(1 from cache)"));
    }
}

mod rules_command {
    use super::*;

    #[test]
    fn lists_catalog() {
        marklint_cmd()
            .arg("rules")
            .assert()
            .success()
            .stdout(predicate::str::contains("MD001"))
            .stdout(predicate::str::contains("line-length"))
            .stdout(predicate::str::contains("MD056"));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn creates_config_once() {
        let dir = TempDir::new().unwrap();

        marklint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();
        assert!(dir.path().join(".marklint.json").is_file());

        marklint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .code(2);

        marklint_cmd()
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn created_config_is_usable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "README.md", "# Title\n\nBody.\n");

        marklint_cmd()
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        marklint_cmd()
            .current_dir(dir.path())
            .args(["--no-cache", "lint", "README.md"])
            .assert()
            .success();
    }
}
