//! # Info Command
//!
//! Shows the settings file location, the quote file location, and basic
//! statistics about the collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use crate::{config::Settings, store};

/// Executes the info command.
///
/// Works even when the quote file does not exist yet; the count and mtime
/// lines are simply omitted in that case.
pub fn execute(quotefile: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::quote_file_path(&settings, quotefile)?;

    let settings_path = Settings::path()
        .map_or_else(|| "(unknown)".to_string(), |p| p.display().to_string());

    println!("{} {}", "Version:".bold(), env!("CARGO_PKG_VERSION"));
    println!("{} {}", "Settings file:".bold(), settings_path);
    println!("{} {}", "Quote file:".bold(), path.display());

    if path.exists() {
        let quotes = store::read_quotes(&path)?;
        println!("{} {}", "Number of quotes:".bold(), quotes.len());

        if let Ok(modified) = fs::metadata(&path).and_then(|meta| meta.modified()) {
            let modified: DateTime<Local> = modified.into();
            println!(
                "{} {}",
                "Quote file last modified:".bold(),
                modified.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    Ok(())
}
