#![allow(dead_code)]

pub mod mock_completion;
pub mod mock_input;
pub mod stub_server;

use selectionproofread::config::Config;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Config with no settle delay so pipeline tests run instantly
pub fn test_config(prompt: &str) -> Config {
    let mut config = Config::with_api_key("k");
    config.prompt = prompt.to_string();
    config.settle_delay_ms = 0;
    config
}

/// Isolated directory holding a config file and a log file for one CLI run
pub struct CliContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
    pub log_path: PathBuf,
}

impl CliContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.json");
        let log_path = temp_dir.path().join("logs").join("selectionproofread.log");
        std::fs::create_dir_all(config_path.parent().unwrap()).expect("config dir");
        Self {
            temp_dir,
            config_path,
            log_path,
        }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Run the binary with the given session type
    pub fn run(&self, session: Option<&str>) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_selectionproofread");
        let mut cmd = Command::new(bin_path);
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--log-file")
            .arg(&self.log_path)
            .env_remove("RUST_LOG");
        match session {
            Some(value) => cmd.env("XDG_SESSION_TYPE", value),
            None => cmd.env_remove("XDG_SESSION_TYPE"),
        };
        cmd.output().expect("Failed to run selectionproofread")
    }

    pub fn log(&self) -> String {
        read_log(&self.log_path)
    }
}

pub fn read_log(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}
