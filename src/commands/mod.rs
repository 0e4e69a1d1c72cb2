//! # Commands
//!
//! CLI command implementations for quotedeck.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod add;
pub mod completions;
pub mod info;
pub mod list;
pub mod random;
pub mod tags;
pub mod webserver;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Settings;

pub use self::{
    add::{execute as add, AddArgs},
    completions::execute as completions,
    info::execute as info,
    list::{execute as list, ListArgs},
    random::{execute as random, execute_today as today, RandomArgs},
    tags::{execute_settags as settags, execute_tags as show_tags, SettagsArgs},
    webserver::execute as webserver,
};

/// Resolves the quote file path: the `--quotefile` override when given,
/// otherwise the configured (or default) path from the settings file.
pub(crate) fn quote_file_path(
    settings: &Settings,
    override_path: Option<PathBuf>,
) -> Result<PathBuf> {
    override_path.map_or_else(|| settings.quote_file(), Ok)
}

/// Like [`quote_file_path`], but fails with guidance when the file does not
/// exist. Every subcommand except `webserver` (which lazy-loads on request)
/// and `info` needs the file to be present.
pub(crate) fn require_quote_file(
    settings: &Settings,
    override_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = quote_file_path(settings, override_path)?;

    if !path.exists() {
        let settings_path = Settings::path()
            .map_or_else(|| "the settings file".to_string(), |p| p.display().to_string());
        anyhow::bail!(
            "The quote file '{}' does not exist. Either create an empty file with this name, \
             or edit {} and change the quote_file property to refer to a quote file that exists.",
            path.display(),
            settings_path
        );
    }

    Ok(path)
}
