//! Common test utilities for depremap integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory with a `node_modules` install root
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root (where depremap.yaml lives)
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new project with an empty `node_modules`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("node_modules"))
            .expect("Failed to create node_modules");
        Self { temp, path }
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a file under `node_modules`
    #[allow(dead_code)]
    pub fn install_file(&self, path: &str, content: &str) {
        self.write_file(&format!("node_modules/{}", path), content);
    }

    /// Write `depremap.yaml` with the given (from, to) pairs
    #[allow(dead_code)]
    pub fn write_config(&self, remappings: &[(&str, &str)]) {
        let mut yaml = String::from("remappings:\n");
        for (from, to) in remappings {
            yaml.push_str(&format!("  - from: \"{}\"\n    to: \"{}\"\n", from, to));
        }
        self.write_file("depremap.yaml", &yaml);
    }

    /// Read a file relative to the project root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the project root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// depremap command running inside this project
    pub fn cmd(&self) -> Command {
        depremap_cmd_in(&self.path)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// depremap command with a clean environment, running in `dir`
#[allow(deprecated)]
pub fn depremap_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depremap").expect("depremap binary not built");
    cmd.env_remove("DEPREMAP_CONFIG");
    cmd.env_remove("DEPREMAP_ROOT");
    cmd.current_dir(dir);
    cmd
}
