#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

pub const USER_V1: &str = "entity User\n  name type=string\n  age type=integer optional=true\n";

pub fn modelguard() -> Command {
    Command::cargo_bin("modelguard").expect("binary under test")
}

/// Writes `<dir>/<number>/<model>.model` with the given source.
pub fn write_version(dir: &TempDir, number: u32, contents: &str) {
    dir.child(format!("{}/model.model", number))
        .write_str(contents)
        .expect("failed to write model fixture");
}

pub fn write_solved(dir: &TempDir, keys: &[&str]) {
    let mut contents = keys.join("\n");
    contents.push('\n');

    dir.child("solved.txt")
        .write_str(&contents)
        .expect("failed to write solved fixture");
}
