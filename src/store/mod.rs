//! # Quote Store
//!
//! File system operations for the quote file. The file is the single source
//! of truth: the whole file is loaded into memory and rewritten wholesale on
//! mutation. Single-process, single-writer; no cross-process locking.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::{Path, PathBuf},
};

use rand::Rng;

use crate::{
    constants::{BACKUP_SUFFIX, COMMENT_PREFIX, TEMP_SUFFIX},
    error::{QuoteError, Result},
    quote::{
        parser::{self, LineFormat},
        Quote,
    },
};

/// Reads all quotes from the quote file.
///
/// Blank lines and lines starting with `#` are skipped. Both `\n` and `\r\n`
/// line endings are accepted. Fails on the first malformed line, naming the
/// file, line number, and offending line, and rejects files containing the
/// same quote text twice.
pub fn read_quotes(path: &Path) -> Result<Vec<Quote>> {
    if !path.exists() {
        return Err(QuoteError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| QuoteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let source_name = path.display().to_string();
    let quotes = parse_quotes(content.lines(), &source_name, LineFormat::Extended)?;
    check_for_duplicates(&quotes, &source_name)?;

    Ok(quotes)
}

/// Parses quotes from an iterator of raw lines (a file's contents or stdin).
///
/// Blank lines and comment lines are skipped; line numbers in errors refer to
/// the iterator position, 1-based.
pub fn parse_quotes<'a, I>(lines: I, source_name: &str, format: LineFormat) -> Result<Vec<Quote>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut quotes = Vec::new();

    for (index, raw_line) in lines.into_iter().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let quote = parser::parse_with(line, format).map_err(|err| QuoteError::Format {
            source_name: source_name.to_string(),
            line: index + 1,
            reason: err.to_string(),
            text: line.to_string(),
        })?;

        quotes.push(quote);
    }

    Ok(quotes)
}

/// Adds quotes to the end of the quote file and returns the new total.
///
/// Duplicates are rejected, both within the new batch and against the quotes
/// already in the file (comparison on quote text alone).
pub fn add_quotes(path: &Path, new_quotes: &[Quote], newline: &str) -> Result<usize> {
    if !path.exists() {
        return Err(QuoteError::NotFound {
            path: path.to_path_buf(),
        });
    }

    check_for_duplicates(new_quotes, "input")?;

    let mut quotes = read_quotes(path)?;

    for new_quote in new_quotes {
        if quotes.iter().any(|q| q.text() == new_quote.text()) {
            return Err(QuoteError::AlreadyExists {
                path: path.to_path_buf(),
                text: new_quote.text().to_string(),
            });
        }
    }

    quotes.extend_from_slice(new_quotes);
    write_quotes(path, &quotes, newline)?;

    Ok(quotes.len())
}

/// Atomically rewrites the quote file with the given quotes.
///
/// The new content is written to a temp file in the same directory, the
/// previous file is copied to a `.bak` sibling, and the temp file is renamed
/// over the original. Refuses to proceed when the existing backup is larger
/// than the new content would be, since that suggests an accidental
/// truncation.
pub fn write_quotes(path: &Path, quotes: &[Quote], newline: &str) -> Result<()> {
    if !path.exists() {
        return Err(QuoteError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut content = String::new();
    for quote in quotes {
        content.push_str(&parser::serialize(quote));
        content.push_str(newline);
    }

    let temp_path = unused_temp_path(path);
    fs::write(&temp_path, &content).map_err(|source| QuoteError::Write {
        path: temp_path.clone(),
        source,
    })?;

    let backup_path = sibling_path(path, BACKUP_SUFFIX);
    if let Ok(backup_meta) = fs::metadata(&backup_path) {
        if backup_meta.len() > content.len() as u64 {
            let _ = fs::remove_file(&temp_path);
            return Err(QuoteError::SuspiciousBackup {
                path: path.to_path_buf(),
                backup: backup_path,
            });
        }
    }

    fs::copy(path, &backup_path).map_err(|source| QuoteError::Write {
        path: backup_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| QuoteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns all distinct tags in the quote file, sorted.
pub fn read_tags(path: &Path) -> Result<Vec<String>> {
    let quotes = read_quotes(path)?;

    let tags: BTreeSet<String> = quotes
        .iter()
        .flat_map(|quote| quote.tags().iter().cloned())
        .collect();

    Ok(tags.into_iter().collect())
}

/// Rejects a quote list containing the same quote text twice.
fn check_for_duplicates(quotes: &[Quote], source_name: &str) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, quote) in quotes.iter().enumerate() {
        if !seen.insert(quote.text()) {
            return Err(QuoteError::Duplicate {
                source_name: source_name.to_string(),
                line: index + 1,
                text: quote.text().to_string(),
            });
        }
    }

    Ok(())
}

/// A dot-prefixed sibling of `path` with the given suffix, e.g.
/// `.quotes.txt.bak` next to `quotes.txt`.
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "quotes".to_string(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{file_name}{suffix}"))
}

/// Picks a temp file name next to `path` that does not exist yet.
fn unused_temp_path(path: &Path) -> PathBuf {
    let mut rng = rand::rng();
    loop {
        let suffix: u32 = rng.random_range(0..100_000_000);
        let candidate = sibling_path(path, &format!(".{suffix}{TEMP_SUFFIX}"));
        if !candidate.exists() {
            return candidate;
        }
    }
}
