//! # Webserver Command
//!
//! Starts the quote-of-the-day web server. Unlike the other subcommands the
//! quote file is not required to exist up front; it is lazy-loaded per
//! request so the server can start before the collection does.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{config::Settings, web};

/// Executes the webserver command.
pub fn execute(quotefile: Option<PathBuf>) -> Result<()> {
    env_logger::init();

    let settings = Settings::load()?;
    let path = super::quote_file_path(&settings, quotefile)?;

    web::run_server(&settings, path)
}
