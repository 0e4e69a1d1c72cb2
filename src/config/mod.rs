//! # Settings
//!
//! Handles the per-user settings stored at `~/.config/quotedeck/settings.conf`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR, DEFAULT_QUOTE_FILENAME, DEFAULT_WEB_IP, DEFAULT_WEB_PORT, SETTINGS_FILENAME,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect settings to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect the settings file without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Line terminator used when writing the quote file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// The platform's native terminator.
    #[default]
    Platform,
    /// `\n`
    Unix,
    /// `\r\n`
    Windows,
}

impl LineSeparator {
    /// Returns the terminator string this setting stands for.
    pub const fn as_newline(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
            Self::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Per-user settings stored at ~/.config/quotedeck/settings.conf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the quote file (default: ~/.config/quotedeck/quotes.txt)
    #[serde(default)]
    pub quote_file: Option<PathBuf>,

    /// Line terminator used when writing the quote file
    #[serde(default)]
    pub line_separator: LineSeparator,

    /// Listen port for the quote-of-the-day web server
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    /// Listen address for the quote-of-the-day web server
    #[serde(default = "default_web_ip")]
    pub web_ip: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quote_file: None,
            line_separator: LineSeparator::default(),
            web_port: DEFAULT_WEB_PORT,
            web_ip: DEFAULT_WEB_IP.to_string(),
        }
    }
}

const fn default_web_port() -> u16 {
    DEFAULT_WEB_PORT
}

fn default_web_ip() -> String {
    DEFAULT_WEB_IP.to_string()
}

impl Settings {
    /// Returns the path to the settings file (~/.config/quotedeck/settings.conf)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(SETTINGS_FILENAME))
    }

    /// Returns the path to the settings directory (~/.config/quotedeck)
    pub fn dir() -> Option<PathBuf> {
        // Check for thread-local test override first (no env var modification)
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR))
    }

    /// Loads the settings, creating a commented default settings file and an
    /// empty quote file at the default location on first run.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            Self::bootstrap(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Returns the effective quote file path: the configured one, or the
    /// default `quotes.txt` next to the settings file.
    pub fn quote_file(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.quote_file {
            return Ok(path.clone());
        }
        Self::dir()
            .map(|dir| dir.join(DEFAULT_QUOTE_FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
    }

    /// Returns the line terminator to use when writing the quote file.
    pub const fn newline(&self) -> &'static str {
        self.line_separator.as_newline()
    }

    /// Creates the settings directory, the commented default settings file,
    /// and an empty default quote file.
    fn bootstrap(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let settings = Self::default();
        Self::save_with_comments(path, &settings)?;

        let quote_file = settings.quote_file()?;
        if !quote_file.exists() {
            fs::write(
                &quote_file,
                "# quotedeck quote file - one quote per line:\n\
                 # <quote> | <author> | <publication> | <tag1, tag2, ...>\n",
            )
            .with_context(|| format!("Failed to create quote file: {}", quote_file.display()))?;
        }

        Ok(())
    }

    /// Saves settings with detailed comments for all options.
    fn save_with_comments(path: &PathBuf, settings: &Self) -> Result<()> {
        let quote_file_line = settings.quote_file.as_ref().map_or_else(
            || format!("# quote_file = \"{}\"", default_quote_file_hint()),
            |p| format!("quote_file = \"{}\"", p.display()),
        );

        let line_separator = match settings.line_separator {
            LineSeparator::Platform => "platform",
            LineSeparator::Unix => "unix",
            LineSeparator::Windows => "windows",
        };

        let content = format!(
            r#"# quotedeck Settings
# This file configures quotedeck.
# Location: ~/.config/quotedeck/settings.conf

# Path to the quote file: plain UTF-8 text, one quote per line, fields
# separated by '|' (quote | author | publication | tags).
# Default: quotes.txt next to this file.
{quote_file_line}

# Line terminator used when rewriting the quote file.
# Valid values: "platform", "unix", "windows".
line_separator = "{line_separator}"

# Listen port for the quote-of-the-day web server (qd webserver).
web_port = {web_port}

# Listen address for the quote-of-the-day web server.
web_ip = "{web_ip}"
"#,
            quote_file_line = quote_file_line,
            line_separator = line_separator,
            web_port = settings.web_port,
            web_ip = settings.web_ip,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }
}

fn default_quote_file_hint() -> String {
    Settings::dir().map_or_else(
        || format!("~/.config/{CONFIG_DIR}/{DEFAULT_QUOTE_FILENAME}"),
        |dir| dir.join(DEFAULT_QUOTE_FILENAME).display().to_string(),
    )
}
