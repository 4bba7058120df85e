// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SEED: &str = r#"{"id":"a","fields":{"ownerId":"u1","title":"Alpha","content":"first note","category":"work","updatedAt":{"seconds":100}}}
{"id":"b","fields":{"ownerId":"u1","title":"Bravo","content":"second note","tags":["home","weekly"],"updatedAt":{"seconds":200}}}
{"id":"c","fields":{"ownerId":"u2","title":"Charlie","content":"someone else","isPublic":true,"updatedAt":{"seconds":300}}}
{"id":"d","fields":{"ownerId":"u2","title":"Delta","content":"private","updatedAt":{"seconds":400}}}
"#;

/// Temp dir holding `notes.jsonl` (from [`SEED`]) and `config.toml`.
pub fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.jsonl"), SEED).unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "origin = \"https://notes.test\"\n",
    )
    .unwrap();
    temp
}

/// `jotter` pointed at the fixture's seed and config, acting as `user`.
pub fn jotter(temp: &TempDir, user: Option<&str>) -> Command {
    let mut cmd = cargo_bin_cmd!("jotter");
    cmd.arg("--seed")
        .arg(temp.path().join("notes.jsonl"))
        .arg("--config")
        .arg(temp.path().join("config.toml"));
    if let Some(user) = user {
        cmd.arg("--user").arg(user);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}
