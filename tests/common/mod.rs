//! # Test Harness
//!
//! Provides utilities for integration testing quotedeck without affecting
//! user configuration. Uses thread-local storage instead of environment
//! variables to avoid any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use quotedeck::set_home_override;

/// Test environment that redirects the settings directory (and with it the
/// default quote file) into a temporary "home" directory.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect the settings path (no env var
    /// modification), so parallel tests do not interfere.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path to the settings directory (~/.config/quotedeck).
    pub fn settings_dir(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("quotedeck")
    }

    /// Returns the path where the settings file would be stored.
    pub fn settings_path(&self) -> PathBuf {
        self.settings_dir().join("settings.conf")
    }

    /// Returns the default quote file path.
    pub fn quote_path(&self) -> PathBuf {
        self.settings_dir().join("quotes.txt")
    }

    /// Creates a settings file with the given content.
    pub fn write_settings(&self, content: &str) {
        let path = self.settings_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create settings directory");
        }
        fs::write(path, content).expect("Failed to write settings");
    }

    /// Creates the default quote file from the given lines.
    #[allow(dead_code)]
    pub fn write_quote_file(&self, lines: &[&str]) {
        self.write_quote_file_at(&self.quote_path(), lines);
    }

    /// Creates a quote file at an explicit path from the given lines.
    #[allow(dead_code)]
    pub fn write_quote_file_at(&self, path: &PathBuf, lines: &[&str]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create quote file directory");
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(path, content).expect("Failed to write quote file");
    }

    /// Reads the default quote file content.
    #[allow(dead_code)]
    pub fn read_quote_file(&self) -> String {
        fs::read_to_string(self.quote_path()).expect("Failed to read quote file")
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates a test environment with default settings and a quote file holding
/// the given lines.
#[allow(dead_code)]
pub fn setup_with_quotes(lines: &[&str]) -> TestEnv {
    let env = TestEnv::new();
    env.write_settings(&SettingsBuilder::new().build());
    env.write_quote_file(lines);
    env
}

// =============================================================================
// Settings Builder
// =============================================================================

/// Builder for creating test settings files.
pub struct SettingsBuilder {
    quote_file: Option<String>,
    line_separator: Option<String>,
    web_port: Option<u16>,
    web_ip: Option<String>,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            quote_file: None,
            line_separator: Some("unix".to_string()),
            web_port: None,
            web_ip: None,
        }
    }
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn quote_file(mut self, path: impl Into<String>) -> Self {
        self.quote_file = Some(path.into());
        self
    }

    #[allow(dead_code)]
    pub fn line_separator(mut self, value: impl Into<String>) -> Self {
        self.line_separator = Some(value.into());
        self
    }

    #[allow(dead_code)]
    pub fn web_port(mut self, port: u16) -> Self {
        self.web_port = Some(port);
        self
    }

    #[allow(dead_code)]
    pub fn web_ip(mut self, ip: impl Into<String>) -> Self {
        self.web_ip = Some(ip.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(ref quote_file) = self.quote_file {
            lines.push(format!("quote_file = \"{quote_file}\""));
        }
        if let Some(ref line_separator) = self.line_separator {
            lines.push(format!("line_separator = \"{line_separator}\""));
        }
        if let Some(web_port) = self.web_port {
            lines.push(format!("web_port = {web_port}"));
        }
        if let Some(ref web_ip) = self.web_ip {
            lines.push(format!("web_ip = \"{web_ip}\""));
        }
        lines.join("\n")
    }
}
