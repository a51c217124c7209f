#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub backups: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).expect("create work dir");

        let backups = make_fixture_backups(tmp.path());

        Self {
            _tmp: tmp,
            home,
            backups,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("forscan-helper");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn backups_arg(&self) -> &str {
        self.backups.to_str().expect("backup path utf8")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/forscan-helper");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }
}

fn make_fixture_backups(base: &Path) -> PathBuf {
    let dir = base.join("abt");
    fs::create_dir_all(&dir).expect("create backup dir");
    fs::write(
        dir.join("VIN123_ABS_20240101_010101.abt"),
        [1u8, 0, 0, 0, 2, 0, 0, 0],
    )
    .expect("write old backup");
    fs::write(
        dir.join("VIN123_ABS_20250101_010101.abt"),
        [3u8, 0, 0, 0, 4, 0, 0, 0, 9, 9],
    )
    .expect("write new backup");
    fs::write(dir.join("VIN123_PCM_garbage_010101.abt"), [0u8; 8])
        .expect("write malformed backup");
    fs::write(dir.join("VIN123_BCM_20260101_010101.bak"), [0u8; 8])
        .expect("write other extension");
    dir
}
