//! # Errors
//!
//! Error types for quote parsing, storage, and selection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced by the quote store and parser.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A line did not match the expected quote format.
    #[error("syntax error on line {line} of {source_name}: {reason}. Line with error: \"{text}\"")]
    Format {
        source_name: String,
        line: usize,
        reason: String,
        text: String,
    },

    /// A quote string could not be parsed.
    #[error("{0}")]
    Parse(String),

    /// A quote field contained a character the file format cannot represent.
    #[error("the {field} included a {found} character")]
    InvalidField { field: &'static str, found: String },

    /// A tag contained characters outside letters, digits, and underscores.
    #[error("invalid tag '{0}': only letters, digits, and underscores are allowed in tags")]
    InvalidTag(String),

    /// The quote file does not exist.
    #[error("the quote file '{path}' was not found")]
    NotFound { path: PathBuf },

    /// The quote file could not be read.
    #[error("the quote file '{path}' could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The quote file could not be written.
    #[error("the quotes could not be written to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The same quote text appeared twice in one source.
    #[error("a duplicate quote was found on line {line} of '{source_name}'. Quote: \"{text}\"")]
    Duplicate {
        source_name: String,
        line: usize,
        text: String,
    },

    /// A new quote's text is already present in the quote file.
    #[error("the quote \"{text}\" is already in the quote file {path}")]
    AlreadyExists { path: PathBuf, text: String },

    /// More than one quote matched a supposedly unique hash.
    #[error("a hash collision occurred, more than one quote in the quote file matches hash '{0}'")]
    HashCollision(String),

    /// The collection (or a filter result) contained no quotes.
    #[error("no quotes match the given criteria")]
    EmptyCollection,

    /// The existing backup is larger than the file this write would produce.
    #[error(
        "the backup file '{backup}' is larger than the quote file '{path}' would be after this \
         operation. This is suspicious, the quote file was not modified. If this was expected, \
         delete the backup file and try again"
    )]
    SuspiciousBackup { path: PathBuf, backup: PathBuf },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
