use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

fn wpbump() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("wpbump")
}

fn plugin_dir(readme: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("readme.txt"), readme).expect("write readme.txt");
    fs::write(
        dir.path().join("myplugin.php"),
        "<?php\n/**\n * Version: 1.2.3\n * Text Domain: myplugin\n */\ndefine('MYPLUGIN_VERSION', '1.2.3');\n",
    )
    .expect("write myplugin.php");
    dir
}

#[test]
fn help_describes_the_tool() {
    wpbump()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("WordPress"));
}

#[test]
fn version_prints_banner_and_version() {
    wpbump()
        .arg("--version")
        .env("WPBUMP_CLI_VERSION", "9.9.9")
        .assert()
        .success()
        .stdout(contains("v9.9.9"));
}

#[test]
fn short_version_flag_is_accepted() {
    wpbump()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_arguments_are_rejected() {
    wpbump().arg("--dry-run").assert().failure();
    wpbump().arg("patch").assert().failure();
}

#[test]
fn missing_readme_fails_without_touching_plugin_file() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("myplugin.php"), " * Text Domain: myplugin\n").expect("write php");

    wpbump()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("readme.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("myplugin.php")).expect("read php"),
        " * Text Domain: myplugin\n"
    );
}

#[test]
fn readme_without_stable_tag_fails() {
    let dir = plugin_dir("=== My Plugin ===\nTested up to: 6.4\n");

    wpbump()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("Stable tag"));
}

#[test]
fn malformed_stable_tag_fails() {
    let dir = plugin_dir("=== My Plugin ===\nStable tag: trunk\n");

    wpbump()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("Invalid version 'trunk'"));

    assert!(
        fs::read_to_string(dir.path().join("readme.txt"))
            .expect("read readme")
            .contains("Stable tag: trunk")
    );
}
