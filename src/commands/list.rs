//! # List Command
//!
//! Lists quotes matching tag, keyword, number, or hash criteria.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    config::Settings,
    quote::{
        parser,
        search::{self, FilterCriteria},
    },
    store, ui,
};

/// Filter and display options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Comma-separated tags the quote must carry (all of them)
    pub tags: Option<String>,
    /// Keyword to match in text, author, or publication
    pub keyword: Option<String>,
    /// 1-based line number of a single quote
    pub number: Option<usize>,
    /// Short hash of a single quote
    pub hash: Option<String>,
    /// Long-form output (number, author, publication, tags, hash)
    pub long: bool,
    /// Pipe-delimited output, same format as the quote file
    pub extended: bool,
}

/// Executes the list command.
pub fn execute(quotefile: Option<PathBuf>, args: &ListArgs) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    let quotes = store::read_quotes(&path)?;

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
        tags: args
            .tags
            .as_deref()
            .map(parser::parse_tags)
            .transpose()?
            .unwrap_or_default(),
        keyword: args.keyword.clone(),
        number: args.number,
        hash: args.hash.clone(),
    };

    let selected = search::select_indices(&quotes, &criteria)?;

    if selected.is_empty() {
        ui::print_no_quotes();
        return Ok(());
    }

    for index in selected {
        let quote = &quotes[index];
        if args.long {
            ui::print_quote_long(quote, index + 1);
        } else if args.extended {
            ui::print_quote_extended(quote);
        } else {
            ui::print_quote_short(quote);
        }
    }

    Ok(())
}
