//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn groundwork() -> Command {
    let mut cmd = Command::cargo_bin("groundwork").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn invalid_value_error_suggests_the_allowed_set() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("README.md"),
        "<!-- GROUNDWORK-CONFIG-START -->\n\
         PROJECT_TYPE: api\n\
         LANGUAGE: cobol\n\
         FRAMEWORK: none\n\
         BUILD_SYSTEM: make\n\
         DATABASE: none\n\
         DEPLOYMENT: none\n\
         CI_CD: none\n\
         TESTING: none\n\
         LICENSE_TYPE: mit\n\
         VISIBILITY: public\n\
         <!-- GROUNDWORK-CONFIG-END -->\n",
    )
    .unwrap();

    groundwork()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cobol"))
        .stderr(predicate::str::contains("python"))
        .stderr(predicate::str::contains("rust"));
}

#[test]
fn missing_block_error_suggests_init() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "# No block here\n").unwrap();

    groundwork()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("groundwork init"));
}

#[test]
fn multiple_violations_are_all_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("README.md"),
        "<!-- GROUNDWORK-CONFIG-START -->\n\
         LANGUAGE: go\n\
         <!-- GROUNDWORK-CONFIG-END -->\n",
    )
    .unwrap();

    // Nine missing fields, every one named in a single run.
    groundwork()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PROJECT_TYPE"))
        .stderr(predicate::str::contains("FRAMEWORK"))
        .stderr(predicate::str::contains("DATABASE"))
        .stderr(predicate::str::contains("VISIBILITY"));
}

#[test]
fn explicit_missing_config_file_is_a_config_error() {
    groundwork()
        .args(["--config", "/nonexistent/groundwork.toml", "check"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}
