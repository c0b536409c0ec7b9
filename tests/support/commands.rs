//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a strongroom command bound to this test's vault home.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("strongroom").expect("failed to find strongroom binary");
        cmd.env("STRONGROOM_HOME", self.home.path());
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("STRONGROOM_LOG");
        cmd
    }

    /// Run with arguments and capture output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run strongroom")
    }

    pub fn note_add(&self, title: &str, content: &str) -> Output {
        self.run(&["note", "add", title, "--content", content])
    }

    pub fn note_add_encrypted(&self, title: &str, content: &str) -> Output {
        self.run(&["note", "add", title, "--content", content, "--encrypt"])
    }

    pub fn note_list_json(&self) -> Output {
        self.run(&["note", "list", "--json"])
    }

    pub fn breach_scan(&self, credentials: &Path) -> Output {
        self.run(&["breach", "scan", &credentials.to_string_lossy()])
    }

    pub fn breach_list_json(&self) -> Output {
        self.run(&["breach", "list", "--json"])
    }

    pub fn report_json(&self, credentials: &Path) -> Output {
        self.run(&["report", &credentials.to_string_lossy(), "--json"])
    }
}
