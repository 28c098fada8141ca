//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REACT_MANIFEST: &str = r#"
rules:
  jsx-key:
    meta:
      type: problem
      fixable: code
      messages:
        missingKey: 'Missing "key" prop for element {{element}}'
    pattern: '<(?P<element>li)>'
    messageId: missingKey
    replacement: '<$element key={index}>'
"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let react = temp.path().join("node_modules").join("eslint-plugin-react");
    fs::create_dir_all(&react).unwrap();
    fs::write(react.join("plugin.yml"), REACT_MANIFEST).unwrap();
    temp
}

fn cmd(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("disable-autofix"));
    cmd.current_dir(project.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("disable-autofix"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("auto-fixing disabled"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("disable-autofix"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_list_shows_builtin_and_provider_rules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no-var"))
        .stdout(predicate::str::contains("react/jsx-key (problem)"));
    Ok(())
}

#[test]
fn cli_list_no_builtins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    cmd(&temp)
        .args(["list", "--no-builtins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("react/jsx-key"))
        .stdout(predicate::str::contains("no-var").not());
    Ok(())
}

#[test]
fn cli_list_json_has_no_fixable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = cmd(&temp).args(["list", "--json"]).output()?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["meta"]["name"], "eslint-plugin-disable-autofix");
    assert!(json["rules"]["react/jsx-key"]["meta"]["fixable"].is_null());
    assert_eq!(json["rules"]["react/jsx-key"]["meta"]["type"], "problem");
    Ok(())
}

#[test]
fn cli_check_reports_problems_without_fixes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("list.jsx"), "<ul>\n  <li>a</li>\n</ul>\n")?;

    cmd(&temp)
        .args(["check", "list.jsx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "problem[react/jsx-key]: Missing \"key\" prop for element li",
        ))
        .stdout(predicate::str::contains("list.jsx:2:3"));
    Ok(())
}

#[test]
fn cli_check_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("app.js"), "var x = 1;\n")?;

    let output = cmd(&temp)
        .args(["check", "app.js", "--format", "json", "--rule", "no-var"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["problems"][0]["ruleId"], "no-var");
    assert!(json["problems"][0].get("fix").is_none());
    Ok(())
}

#[test]
fn cli_check_clean_file_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("app.js"), "let x = 1;\n")?;

    cmd(&temp)
        .args(["check", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
    Ok(())
}

#[test]
fn cli_check_unknown_rule_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(temp.path().join("app.js"), "")?;

    cmd(&temp)
        .args(["check", "app.js", "--rule", "react/nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule: react/nope"));
    Ok(())
}

#[test]
fn cli_missing_packages_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    cmd(&temp)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Packages directory not found"));
    Ok(())
}

#[test]
fn cli_settings_file_picks_packages_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let react = temp.path().join("deps").join("eslint-plugin-react");
    fs::create_dir_all(&react)?;
    fs::write(react.join("plugin.yml"), REACT_MANIFEST)?;
    fs::write(temp.path().join(".disable-autofix.yml"), "packages_dir: deps\n")?;

    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("react/jsx-key"));
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let elsewhere = TempDir::new()?;

    cmd(&elsewhere)
        .arg("--project")
        .arg(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("react/jsx-key"));
    Ok(())
}
