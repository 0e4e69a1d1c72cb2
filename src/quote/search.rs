//! # Search and Filter
//!
//! Quote filtering logic. This module is the single source of truth for all
//! quote selection, used by the CLI commands and the web front-end.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Quote;
use crate::error::{QuoteError, Result};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Unified filter criteria for quote selection.
///
/// All fields are optional - empty/None means "match all". Active criteria
/// compose as a logical AND.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Tags the quote must carry, all of them (exact, case-sensitive match).
    pub tags: Vec<String>,
    /// Keyword that must occur in the text, author, or publication
    /// (case-insensitive substring).
    pub keyword: Option<String>,
    /// 1-based position of the quote in the file.
    pub number: Option<usize>,
    /// Short hash of the quote text.
    pub hash: Option<String>,
}

impl FilterCriteria {
    /// Creates empty filter criteria (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
            && self.keyword.is_none()
            && self.number.is_none()
            && self.hash.is_none()
    }
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks whether a keyword occurs in the quote's text, author, or
/// publication (case-insensitive substring).
pub fn matches_keyword(quote: &Quote, keyword: &str) -> bool {
    let keyword_lower = keyword.to_lowercase();

    quote.text().to_lowercase().contains(&keyword_lower)
        || quote.author().to_lowercase().contains(&keyword_lower)
        || quote.publication().to_lowercase().contains(&keyword_lower)
}

/// Checks whether a quote at position `index` (0-based) matches the criteria.
pub fn matches_filter(quote: &Quote, index: usize, criteria: &FilterCriteria) -> bool {
    if !criteria.tags.is_empty() && !quote.has_tags(&criteria.tags) {
        return false;
    }

    if let Some(ref keyword) = criteria.keyword {
        if !matches_keyword(quote, keyword) {
            return false;
        }
    }

    if let Some(number) = criteria.number {
        if number != index + 1 {
            return false;
        }
    }

    if let Some(ref hash) = criteria.hash {
        if *hash != quote.hash() {
            return false;
        }
    }

    true
}

/// Returns the 0-based indices of the quotes matching the criteria.
///
/// When a hash criterion is set and more than one quote matches it, the
/// (unlikely) collision is reported as an error instead of returning an
/// arbitrary match.
pub fn select_indices(quotes: &[Quote], criteria: &FilterCriteria) -> Result<Vec<usize>> {
    let selected: Vec<usize> = quotes
        .iter()
        .enumerate()
        .filter(|(index, quote)| matches_filter(quote, *index, criteria))
        .map(|(index, _)| index)
        .collect();

    if let Some(ref hash) = criteria.hash {
        if selected.len() > 1 {
            return Err(QuoteError::HashCollision(hash.clone()));
        }
    }

    Ok(selected)
}
