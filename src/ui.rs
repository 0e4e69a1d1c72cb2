//! # UI Utilities
//!
//! Shared output formatting for quotes across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

use crate::quote::{parser, Quote};

/// Prints a quote in the default one-line display form:
/// `<text>  - <author> (<publication>)`.
///
/// Unattributed quotes are printed as bare text.
pub fn print_quote_short(quote: &Quote) {
    if quote.author().is_empty() && quote.publication().is_empty() {
        println!("{}", quote.text());
        return;
    }

    let publication = if quote.publication().is_empty() {
        String::new()
    } else {
        format!(" ({})", quote.publication())
    };

    println!(
        "{}  - {}{}",
        quote.text(),
        quote.author().bold(),
        publication.dimmed()
    );
}

/// Prints a quote in long form: numbered, with author, publication, tags,
/// and hash on separate lines.
pub fn print_quote_long(quote: &Quote, number: usize) {
    println!("{}: {}", number.bold(), quote.text());
    println!("    {} {}", "author:".dimmed(), quote.author());
    println!("    {} {}", "publication:".dimmed(), quote.publication());
    println!("    {} {}", "tags:".dimmed(), quote.tags().join(", "));
    println!("    {} {}", "hash:".dimmed(), quote.hash());
}

/// Prints a quote in the same pipe-delimited format used in the quote file.
pub fn print_quote_extended(quote: &Quote) {
    println!("{}", parser::serialize(quote));
}

/// Prints the friendly empty-result message.
pub fn print_no_quotes() {
    println!("{}", "No quotes found.".dimmed());
}
