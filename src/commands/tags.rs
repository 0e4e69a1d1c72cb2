//! # Tags and Settags Commands
//!
//! `tags` lists every distinct tag in the quote file; `settags` replaces the
//! tags of a single quote selected by number or hash.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Settings,
    error::QuoteError,
    quote::{
        parser,
        search::{self, FilterCriteria},
    },
    store,
};

/// Arguments for the settags command
#[derive(Debug, Clone)]
pub struct SettagsArgs {
    /// 1-based line number of the quote to retag
    pub number: Option<usize>,
    /// Short hash of the quote to retag
    pub hash: Option<String>,
    /// Comma-separated replacement tags
    pub tags: String,
}

/// Executes the tags command: prints all distinct tags, one per line.
pub fn execute_tags(quotefile: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    for tag in store::read_tags(&path)? {
        println!("{tag}");
    }

    Ok(())
}

/// Executes the settags command.
pub fn execute_settags(quotefile: Option<PathBuf>, args: &SettagsArgs) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    if args.number.is_none() && args.hash.is_none() {
        anyhow::bail!("either the -n or the -s argument must be included");
    }
    if args.number.is_some() && args.hash.is_some() {
        anyhow::bail!("both the -s and -n option were included, but only one is allowed");
    }

    let new_tags = parser::parse_tags(&args.tags)?;
    let mut quotes = store::read_quotes(&path)?;

    if let Some(number) = args.number {
        if number == 0 || number > quotes.len() {
            anyhow::bail!(
                "the number argument {} is out of range, there are {} quotes in the file",
                number,
                quotes.len()
            );
        }
    }

    let criteria = FilterCriteria {
        number: args.number,
        hash: args.hash.clone(),
        ..FilterCriteria::new()
    };

    let selected = search::select_indices(&quotes, &criteria)?;
    let Some(&index) = selected.first() else {
        return Err(QuoteError::EmptyCollection.into());
    };

    quotes[index].set_tags(new_tags)?;
    store::write_quotes(&path, &quotes, settings.newline())?;

    println!(
        "{} Set tags on quote {}: {}",
        "✓".green(),
        index + 1,
        quotes[index].tags().join(", ")
    );

    Ok(())
}
