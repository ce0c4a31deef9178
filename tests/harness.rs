//! Test harness for bfwalk integration tests

use assert_cmd::Command;
use std::path::Path;

use bfwalk::test_utils::TestTree;

/// Build a `bfwalk` command running inside `dir`.
pub fn bfwalk(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bfwalk").expect("bfwalk binary should be built");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Run `bfwalk` and return (stdout, stderr, success).
pub fn run_bfwalk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = bfwalk(dir).args(args).output().expect("Failed to run bfwalk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The standard layout used across tests.
pub fn sample_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("root/file1.txt", "");
    tree.add_file("root/dirA/file1.txt", "");
    tree.add_file("root/dirB/file1.txt", "");
    tree.add_file("root/dirB/sub/file1.txt", "");
    tree
}

/// Lines of text output, without the trailing summary block.
pub fn entry_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().take_while(|l| !l.is_empty()).collect()
}
