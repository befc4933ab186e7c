use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn sift_cmd() -> Command {
    let mut cmd = Command::cargo_bin("markdownsift").unwrap();
    cmd.env_remove("MARKDOWNSIFT_CONFIG");
    cmd.env_remove("MARKDOWNSIFT_LOG");
    cmd
}

/// Write a note file with content
#[allow(dead_code)]
pub fn create_note(dir: &Path, filename: &str, content: &str) {
    fs::write(dir.join(filename), content).unwrap();
}
