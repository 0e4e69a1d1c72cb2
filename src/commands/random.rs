//! # Random and Today Commands
//!
//! Displays a single randomly selected quote. `random` uses system entropy;
//! `today` uses the deterministic daily rotation, so repeated calls on the
//! same day show the same quote.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    config::Settings,
    quote::{
        parser, pick,
        search::{self, FilterCriteria},
    },
    store, ui,
};

/// Filter options for the random command
#[derive(Debug, Clone, Default)]
pub struct RandomArgs {
    /// Comma-separated tags the quote must carry (all of them)
    pub tags: Option<String>,
    /// Keyword to match in text, author, or publication
    pub keyword: Option<String>,
}

/// Executes the random command.
pub fn execute(quotefile: Option<PathBuf>, args: &RandomArgs) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    let quotes = store::read_quotes(&path)?;

    let criteria = FilterCriteria {
        tags: args
            .tags
            .as_deref()
            .map(parser::parse_tags)
            .transpose()?
            .unwrap_or_default(),
        keyword: args.keyword.clone(),
        ..FilterCriteria::new()
    };

    let selected = search::select_indices(&quotes, &criteria)?;

    match pick::random_index(selected.len()) {
        Some(position) => ui::print_quote_short(&quotes[selected[position]]),
        None => ui::print_no_quotes(),
    }

    Ok(())
}

/// Executes the today command: the deterministic quote of the day.
pub fn execute_today(quotefile: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load()?;
    let path = super::require_quote_file(&settings, quotefile)?;

    let quotes = store::read_quotes(&path)?;

    match pick::daily_index(quotes.len()) {
        Some(index) => ui::print_quote_short(&quotes[index]),
        None => ui::print_no_quotes(),
    }

    Ok(())
}
