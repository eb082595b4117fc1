//! Binary tests for the rnsvg command line.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SHAPES: &str = r#"<svg viewBox="0 0 10 10"><rect width="10" unknown-attr="x"/><foo/></svg>"#;

#[test]
fn test_stdin_to_stdout() {
    Command::cargo_bin("rnsvg")
        .unwrap()
        .write_stdin(SHAPES)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<Svg viewBox="0 0 10 10" width="10" height="10">"#))
        .stdout(predicate::str::contains(r#"<Rect width="10" />"#))
        .stderr(predicate::str::contains(
            r#"Warning: Unsupported tag "Foo" removed. In <stdin>"#,
        ))
        .stderr(predicate::str::contains(
            r#"WARNING: Unsupported attribute "unknown-attr" in tag "Rect" removed. In <stdin>"#,
        ));
}

#[test]
fn test_file_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("shapes.svg");
    let output = dir.path().join("Shapes.jsx");
    fs::write(&input, SHAPES).unwrap();

    Command::cargo_bin("rnsvg")
        .unwrap()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--no-dimensions")
        .assert()
        .success()
        .stderr(predicate::str::contains(input.display().to_string()));

    let jsx = fs::read_to_string(&output).unwrap();
    assert!(jsx.starts_with("<Svg viewBox=\"0 0 10 10\">\n"));
}

#[test]
fn test_existing_output_requires_force() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("shapes.svg");
    let output = dir.path().join("Shapes.jsx");
    fs::write(&input, SHAPES).unwrap();
    fs::write(&output, "keep me").unwrap();

    Command::cargo_bin("rnsvg")
        .unwrap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

    Command::cargo_bin("rnsvg")
        .unwrap()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
    assert!(fs::read_to_string(&output).unwrap().starts_with("<Svg"));
}

#[test]
fn test_invalid_svg_fails() {
    Command::cargo_bin("rnsvg")
        .unwrap()
        .write_stdin("<svg><rect></svg>")
        .assert()
        .failure();
}
