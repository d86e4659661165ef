//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn showcase(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showcase").unwrap();
    // Keep the user's real ~/.showcase out of the picture
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    showcase(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_export_writes_bundles() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("dist");

    showcase(&home)
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 files"));

    for name in ["features.json", "commands.json", "agents.json", "index.md", "manifest.json"] {
        assert!(out.join(name).is_file(), "{} missing", name);
    }
    let index = std::fs::read_to_string(out.join("index.md")).unwrap();
    assert!(index.contains("Create a modern sales pipeline"));
}

#[test]
fn test_export_uses_configured_out_dir() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".showcase");
    std::fs::create_dir_all(&config_dir).unwrap();
    let out = home.path().join("public");
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[build]\nout_dir = {:?}\n", out.display().to_string()),
    )
    .unwrap();

    showcase(&home).arg("export").assert().success();
    assert!(out.join("manifest.json").is_file());
}

#[test]
fn test_config_show_prints_default_ports() {
    let home = TempDir::new().unwrap();
    showcase(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev_port = 5173"))
        .stdout(predicate::str::contains("preview_port = 4173"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let home = TempDir::new().unwrap();
    showcase(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".showcase/config.toml").is_file());

    showcase(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    showcase(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_invalid_config_fails_with_path() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".showcase");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[serve\n").unwrap();

    showcase(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_broken_config_can_be_located_and_reset() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".showcase");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[serve\n").unwrap();

    showcase(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    showcase(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    showcase(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev_port = 5173"));
}

#[test]
fn test_tui_rejects_unknown_feature() {
    let home = TempDir::new().unwrap();
    showcase(&home)
        .args(["tui", "--select", "billing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown feature id 'billing'"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    showcase(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showcase"));
}

#[cfg(feature = "server")]
#[test]
fn test_serve_preview_requires_build() {
    let home = TempDir::new().unwrap();
    showcase(&home)
        .args(["serve", "--preview", "--dir"])
        .arg(home.path().join("empty"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("showcase export"));
}
