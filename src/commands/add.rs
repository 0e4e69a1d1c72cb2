//! # Add Command
//!
//! Adds one or more quotes to the quote file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    config::Settings,
    quote::parser::{self, LineFormat},
    store,
};

/// Arguments for the add command
pub struct AddArgs {
    /// The quote string, or `-` to read quotes from stdin, one per line.
    pub quote: String,
    /// Input is in the pipe-delimited quote file format instead of the
    /// simple `<quote> - <author> [(publication)]` format.
    pub extended: bool,
}

/// Executes the add command.
pub fn execute(quotefile: Option<PathBuf>, args: &AddArgs) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    let format = if args.extended {
        LineFormat::Extended
    } else {
        LineFormat::Simple
    };

    let new_quotes = if args.quote == "-" {
        let input = io::read_to_string(io::stdin()).context("Failed to read quotes from stdin")?;
        store::parse_quotes(input.lines(), "stdin", format)?
    } else {
        vec![parser::parse_with(&args.quote, format)?]
    };

    let total = store::add_quotes(&path, &new_quotes, settings.newline())?;

    if new_quotes.len() == 1 {
        println!("1 quote added for total of {total}.");
    } else {
        println!("{} quotes added for total of {total}.", new_quotes.len());
    }

    Ok(())
}
