//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a sitecfg command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - PATH set to the temporary bin directory only
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sitecfg").expect("failed to find sitecfg binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("PATH", self.bin.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SITECFG_SETTINGS");
        cmd.env_remove("SITECFG_LOG");
        cmd.env_remove("SITECFG_LOG_FORMAT");
        cmd.env_remove("DOCUMENT_ROOT");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `sitecfg host`.
    pub fn host(&self, host: &str) -> Output {
        self.cmd()
            .args(["host", host])
            .output()
            .expect("failed to run sitecfg host")
    }

    /// Shortcut for `sitecfg host --json`.
    pub fn host_json(&self, host: &str) -> Output {
        self.cmd()
            .args(["host", host, "--json"])
            .output()
            .expect("failed to run sitecfg host --json")
    }

    /// Shortcut for `sitecfg vars` against the test document root.
    pub fn vars(&self, extra: &[&str]) -> Output {
        self.cmd()
            .args(["vars", "--document-root", "public"])
            .args(extra)
            .output()
            .expect("failed to run sitecfg vars")
    }

    /// Shortcut for `sitecfg secret` against the test document root.
    pub fn secret(&self, key: &str) -> Output {
        self.cmd()
            .args(["secret", key, "--document-root", "public"])
            .output()
            .expect("failed to run sitecfg secret")
    }

    /// Shortcut for `sitecfg data`.
    pub fn data(&self, file: &str) -> Output {
        self.cmd()
            .args(["data", file])
            .output()
            .expect("failed to run sitecfg data")
    }

    /// Shortcut for `sitecfg matter --json`.
    pub fn matter_json(&self, path: &str) -> Output {
        self.cmd()
            .args(["matter", path, "--json"])
            .output()
            .expect("failed to run sitecfg matter")
    }

    /// Shortcut for `sitecfg csv`.
    pub fn csv(&self, input: &str, output: &str) -> Output {
        self.cmd()
            .args(["csv", input, output])
            .output()
            .expect("failed to run sitecfg csv")
    }
}
