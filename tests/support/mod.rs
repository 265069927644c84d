//! Test support utilities for sitecfg integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Layout:
///
/// ```text
/// dir/            project root, holds the project .env and data/
/// dir/public/     document root
/// home/           HOME, holds the user .env
/// bin/            the only PATH entry for spawned commands
/// ```
///
/// No process-global state is mutated; child processes get their
/// environment through the command builder.
pub struct Test {
    pub dir: TempDir,
    pub home: TempDir,
    pub bin: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");
        fs::create_dir_all(dir.path().join("public")).expect("failed to create document root");

        Self { dir, home, bin }
    }

    /// Served document root
    pub fn document_root(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    /// Write `~/.env`
    pub fn write_home_env(&self, contents: &str) {
        fs::write(self.home.path().join(".env"), contents).expect("failed to write home .env");
    }

    /// Write the project `.env` (one level above the document root)
    pub fn write_project_env(&self, contents: &str) {
        fs::write(self.dir.path().join(".env"), contents).expect("failed to write project .env");
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Write a file into `data/`
    pub fn write_data(&self, name: &str, contents: &str) -> PathBuf {
        self.write_file(&format!("data/{}", name), contents)
    }

    /// Install an executable script as `bin/<name>`.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        fs::write(&path, script).expect("failed to write tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod tool");
        path
    }

    /// References the fake tool was called with, in order.
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
