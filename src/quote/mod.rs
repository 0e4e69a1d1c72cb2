//! # Quote
//!
//! Represents a single quote record: text, attribution, and tags.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod parser;
pub mod pick;
pub mod search;

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::{
    constants::QUOTE_HASH_LEN,
    error::{QuoteError, Result},
};

/// A quote with its attribution and tags.
///
/// The author and publication are optional and represented as empty strings
/// when absent. Tags are kept sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
    publication: String,
    tags: Vec<String>,
}

impl Quote {
    /// Creates a new quote, validating that no field contains characters the
    /// single-line file format cannot represent.
    pub fn new(text: &str, author: &str, publication: &str, tags: Vec<String>) -> Result<Self> {
        let text = text.trim().to_string();
        let author = author.trim().to_string();
        let publication = publication.trim().to_string();

        if text.is_empty() {
            return Err(QuoteError::Parse("a quote was not found".to_string()));
        }

        check_field(&text, "quote", true)?;
        check_field(&author, "author", false)?;
        check_field(&publication, "publication", false)?;

        let mut quote = Self {
            text,
            author,
            publication,
            tags: Vec::new(),
        };
        quote.set_tags(tags)?;
        Ok(quote)
    }

    /// Returns the quote text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the author, or an empty string when unattributed.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the publication, or an empty string when unknown.
    pub fn publication(&self) -> &str {
        &self.publication
    }

    /// Returns the tags, sorted and deduplicated.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces the tags, keeping them validated, sorted, and deduplicated.
    pub fn set_tags(&mut self, tags: Vec<String>) -> Result<()> {
        let mut tags: Vec<String> = tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        for tag in &tags {
            if !is_valid_tag(tag) {
                return Err(QuoteError::InvalidTag(tag.clone()));
            }
        }

        tags.sort();
        tags.dedup();
        self.tags = tags;
        Ok(())
    }

    /// Checks whether the quote carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Checks whether the quote carries every one of the given tags.
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.has_tag(tag))
    }

    /// Returns a short hash of the quote text.
    ///
    /// The first 16 hex characters of the SHA-256 digest. Collisions are
    /// unlikely but possible, so lookups by hash must verify that exactly one
    /// quote matches.
    pub fn hash(&self) -> String {
        let digest = Sha256::digest(self.text.as_bytes());
        let mut out = String::with_capacity(QUOTE_HASH_LEN);
        for byte in &digest[..QUOTE_HASH_LEN / 2] {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

/// Checks whether a tag is restricted to letters, digits, and underscores.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rejects characters that would break the one-line-per-quote file format.
/// The quote text additionally may not contain a double quote.
fn check_field(value: &str, field: &'static str, is_quote_text: bool) -> Result<()> {
    for c in value.chars() {
        let found = match c {
            '|' => "pipe (|)".to_string(),
            '\n' => "newline (0x0a)".to_string(),
            '\r' => "carriage return (0x0d)".to_string(),
            '"' if is_quote_text => "double quote (\")".to_string(),
            _ => continue,
        };
        return Err(QuoteError::InvalidField { field, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let quote = Quote::new("  Be yourself.  ", " Oscar Wilde ", "", vec![]).unwrap();
        assert_eq!(quote.text(), "Be yourself.");
        assert_eq!(quote.author(), "Oscar Wilde");
        assert_eq!(quote.publication(), "");
    }

    #[test]
    fn test_new_rejects_empty_text() {
        assert!(Quote::new("   ", "Someone", "", vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_pipe_in_text() {
        let result = Quote::new("a | b", "", "", vec![]);
        assert!(matches!(
            result,
            Err(QuoteError::InvalidField { field: "quote", .. })
        ));
    }

    #[test]
    fn test_new_rejects_double_quote_in_text_only() {
        assert!(Quote::new("she said \"hi\"", "", "", vec![]).is_err());
        // Double quotes are fine in the author field
        assert!(Quote::new("hello", "\"Slim\" Jim", "", vec![]).is_ok());
    }

    #[test]
    fn test_tags_sorted_and_deduplicated() {
        let quote = Quote::new(
            "text",
            "",
            "",
            vec!["wisdom".into(), "art".into(), "wisdom".into()],
        )
        .unwrap();
        assert_eq!(quote.tags(), ["art", "wisdom"]);
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let result = Quote::new("text", "", "", vec!["no spaces".into()]);
        assert!(matches!(result, Err(QuoteError::InvalidTag(_))));
    }

    #[test]
    fn test_has_tags_requires_all() {
        let quote = Quote::new("text", "", "", vec!["a".into(), "b".into()]).unwrap();
        assert!(quote.has_tags(&["a".into()]));
        assert!(quote.has_tags(&["a".into(), "b".into()]));
        assert!(!quote.has_tags(&["a".into(), "c".into()]));
    }

    #[test]
    fn test_hash_is_stable_and_text_only() {
        let a = Quote::new("same text", "Author A", "", vec![]).unwrap();
        let b = Quote::new("same text", "Author B", "Pub", vec!["tag".into()]).unwrap();
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.hash().len(), 16);
        assert!(a.hash().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
