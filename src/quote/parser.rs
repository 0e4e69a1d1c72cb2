//! # Quote Line Parser
//!
//! Parses and serializes the pipe-delimited quote file format, and parses the
//! simple `<quote> - <author> [(publication)]` input format used by `add`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::LazyLock;

use regex::Regex;

use super::{is_valid_tag, Quote};
use crate::{
    constants::{FIELD_COUNT, FIELD_DELIMITER, TAG_DELIMITER, TAG_JOIN},
    error::{QuoteError, Result},
};

/// The two accepted input formats for a single quote line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `<quote> - <author> [(publication)]`
    Simple,
    /// `<quote>|<author>|[<publication>]|[<tag1>,<tag2>,...]`
    Extended,
}

/// Patterns for splitting an attribution into author and publication, tried
/// in order. Group 1 is the author, group 2 the publication (may be empty).
static ATTRIBUTION_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        // Author name (publication)
        Regex::new(r"^([^,]+)\s*\((.*)\)$").unwrap(),
        // Author name, (publication)
        Regex::new(r"^([^,]+),\s*\((.+)\)$").unwrap(),
        // Author name, publication
        Regex::new(r"^([^,]+),\s*([^,']+)$").unwrap(),
        // Author name, 'publication'
        Regex::new(r"^([^,]+),\s*'(.+)'$").unwrap(),
        // Author name
        Regex::new(r"^([^,()']+)\s*()$").unwrap(),
    ]
});

/// Parses a single line in the given format.
pub fn parse_with(line: &str, format: LineFormat) -> Result<Quote> {
    match format {
        LineFormat::Simple => parse_simple(line),
        LineFormat::Extended => parse_line(line),
    }
}

/// Parses one pipe-delimited quote line, the same format used in the quote
/// file. Fields are trimmed; trailing fields may be empty.
pub fn parse_line(line: &str) -> Result<Quote> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(QuoteError::Parse(format!(
            "did not find {} '{}' characters",
            FIELD_COUNT - 1,
            FIELD_DELIMITER
        )));
    }

    let tags = parse_tags(fields[3])?;
    Quote::new(fields[0], fields[1], fields[2], tags)
}

/// Parses a quote in the simple format: `<quote> - <author>`, optionally
/// followed by a publication as `(publication)`, `, publication`, or
/// `, 'publication'`.
///
/// The hyphen separating quote from author is inferred: a hyphen directly
/// after a sentence-ending period wins, then a single hyphen adjacent to
/// whitespace, then a single hyphen with none. Ambiguous lines are rejected.
pub fn parse_simple(input: &str) -> Result<Quote> {
    let line = input.trim();

    if line.contains(FIELD_DELIMITER) {
        return Err(QuoteError::Parse(
            "the quote included an embedded pipe character (|)".to_string(),
        ));
    }

    let (start, end) = find_author_separator(line)?;
    let (author, publication) = parse_attribution(&line[end..])?;

    Quote::new(&line[..start], &author, &publication, Vec::new())
}

/// Parses a comma-separated tag list into validated, sorted, deduplicated
/// tags. Empty entries are skipped.
pub fn parse_tags(raw: &str) -> Result<Vec<String>> {
    let mut tags = Vec::new();

    for raw_tag in raw.split(TAG_DELIMITER) {
        let tag = raw_tag.trim();
        if tag.is_empty() {
            continue;
        }
        if !is_valid_tag(tag) {
            return Err(QuoteError::InvalidTag(tag.to_string()));
        }
        tags.push(tag.to_string());
    }

    tags.sort();
    tags.dedup();
    Ok(tags)
}

/// Renders a quote as a single pipe-delimited line, the inverse of
/// [`parse_line`].
pub fn serialize(quote: &Quote) -> String {
    format!(
        "{} | {} | {} | {}",
        quote.text(),
        quote.author(),
        quote.publication(),
        quote.tags().join(TAG_JOIN)
    )
}

/// A hyphen in the line, with its surrounding-whitespace span and context.
struct HyphenCandidate {
    /// Byte range covering the hyphen and any adjacent whitespace.
    span: (usize, usize),
    /// The nearest non-whitespace character before the hyphen was a period.
    after_period: bool,
    /// At least one whitespace character directly borders the hyphen.
    space_adjacent: bool,
    /// Non-whitespace characters directly border the hyphen on both sides.
    tight: bool,
}

/// Finds the byte span of the hyphen (plus adjacent whitespace) that
/// separates the quote text from the attribution.
fn find_author_separator(line: &str) -> Result<(usize, usize)> {
    let candidates: Vec<HyphenCandidate> = line
        .char_indices()
        .filter(|&(_, c)| c == '-')
        .map(|(i, _)| classify_hyphen(line, i))
        .collect();

    let period: Vec<&HyphenCandidate> =
        candidates.iter().filter(|c| c.after_period).collect();
    if period.len() == 1 {
        return Ok(period[0].span);
    }

    let spaced: Vec<&HyphenCandidate> =
        candidates.iter().filter(|c| c.space_adjacent).collect();
    if spaced.len() == 1 {
        return Ok(spaced[0].span);
    }

    if spaced.is_empty() {
        let tight: Vec<&HyphenCandidate> = candidates.iter().filter(|c| c.tight).collect();
        if tight.len() == 1 {
            return Ok(tight[0].span);
        }
    }

    Err(QuoteError::Parse(
        "unable to determine which hyphen separates the quote from the author".to_string(),
    ))
}

fn classify_hyphen(line: &str, index: usize) -> HyphenCandidate {
    let before = &line[..index];
    let after = &line[index + 1..];

    let before_trimmed = before.trim_end();
    let ws_start = before_trimmed.len();
    let ws_end = index + 1 + (after.len() - after.trim_start().len());

    let prev_char = before_trimmed.chars().next_back();
    let next_char = after.trim_start().chars().next();

    let space_before = ws_start < index;
    let space_after = ws_end > index + 1;

    HyphenCandidate {
        span: (ws_start, ws_end),
        after_period: prev_char == Some('.'),
        space_adjacent: space_before || space_after,
        tight: !space_before && !space_after && prev_char.is_some() && next_char.is_some(),
    }
}

/// Splits an attribution like `Mark Twain (Autobiography)` into author and
/// publication. The publication may be empty.
fn parse_attribution(attribution: &str) -> Result<(String, String)> {
    let attribution = attribution.trim();

    for pattern in ATTRIBUTION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(attribution) {
            let author = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let publication = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            return Ok((author, publication));
        }
    }

    Err(QuoteError::Parse(
        "unable to parse the author and publication. Try 'Quote - Author (Publication)', \
         or 'Quote - Author, Publication'"
            .to_string(),
    ))
}
