//! CLI driver smoke tests.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn source_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("RetroLib/include")).unwrap();
    fs::write(dir.path().join("RetroLib/include/foo.hpp"), "// foo\n").unwrap();
    dir
}

#[test]
fn stages_headers_and_reports_the_package_id() {
    let src = source_tree();
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("retrolib_recipe")
        .unwrap()
        .arg("--source-folder")
        .arg(src.path())
        .arg("--package-folder")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("package id:"))
        .stdout(predicate::str::contains("staged 1 header file(s)"));

    assert!(out.path().join("include/foo.hpp").exists());
}

#[test]
fn emits_consumer_info_as_json() {
    let src = source_tree();
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("retrolib_recipe")
        .unwrap()
        .arg("--source-folder")
        .arg(src.path())
        .arg("--package-folder")
        .arg(out.path())
        .arg("--emit-consumer-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("RETROLIB_WITH_MODULES=0"));
}

#[test]
fn low_standard_fails_with_the_validate_stage_named() {
    let src = source_tree();
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("retrolib_recipe")
        .unwrap()
        .arg("--source-folder")
        .arg(src.path())
        .arg("--package-folder")
        .arg(out.path())
        .args(["-s", "compiler.cppstd=17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validate stage failed"));
}

#[test]
fn rejects_malformed_option_pair() {
    let src = source_tree();
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("retrolib_recipe")
        .unwrap()
        .arg("--source-folder")
        .arg(src.path())
        .arg("--package-folder")
        .arg(out.path())
        .args(["-o", "with_tests"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn reads_settings_and_options_from_a_profile() {
    let src = source_tree();
    // Test layout roots sources at the project root.
    fs::create_dir_all(src.path().join("include")).unwrap();
    fs::write(src.path().join("include/foo.hpp"), "// foo\n").unwrap();
    let out = tempfile::tempdir().unwrap();

    let profile = src.path().join("profile.toml");
    fs::write(
        &profile,
        r#"
[settings]
os = "Linux"
compiler = "gcc"
"compiler.cppstd" = "20"

[options]
with_tests = true
"#,
    )
    .unwrap();

    Command::cargo_bin("retrolib_recipe")
        .unwrap()
        .arg("--source-folder")
        .arg(src.path())
        .arg("--package-folder")
        .arg(out.path())
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("test requirement: catch2/3.7.1"));

    assert!(
        src.path()
            .join("build/Release/generators/catch2-deps.json")
            .exists()
    );
}
