//! # Constants
//!
//! Centralized constants for magic values used throughout quotedeck.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Quote File Format
// =============================================================================

/// Field delimiter in the quote file (text | author | publication | tags).
pub const FIELD_DELIMITER: char = '|';

/// Number of fields per quote line.
pub const FIELD_COUNT: usize = 4;

/// Separator between tags within the tag field.
pub const TAG_DELIMITER: char = ',';

/// Separator used when writing the tag field back out.
pub const TAG_JOIN: &str = ", ";

/// Lines starting with this character are skipped when reading.
pub const COMMENT_PREFIX: char = '#';

/// Length of the short quote hash in hex characters.
pub const QUOTE_HASH_LEN: usize = 16;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside user's config directory).
pub const CONFIG_DIR: &str = "quotedeck";

/// Settings file name (inside `CONFIG_DIR`).
pub const SETTINGS_FILENAME: &str = "settings.conf";

/// Default quote file name (inside `CONFIG_DIR`).
pub const DEFAULT_QUOTE_FILENAME: &str = "quotes.txt";

/// Suffix for the backup file written before each quote file rewrite.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Suffix for the temp file written during a quote file rewrite.
pub const TEMP_SUFFIX: &str = ".tmp";

// =============================================================================
// Daily Selection
// =============================================================================

/// Epoch for the days counter that drives the quote-of-the-day rotation.
pub const DAILY_EPOCH: (i32, u32, u32) = (2016, 1, 1);

/// Fixed seed for the daily rotation shuffle.
pub const DAILY_SHUFFLE_SEED: u64 = 0;

// =============================================================================
// Web Server
// =============================================================================

/// Default listen port for the quote-of-the-day server.
pub const DEFAULT_WEB_PORT: u16 = 5544;

/// Default listen address for the quote-of-the-day server.
pub const DEFAULT_WEB_IP: &str = "127.0.0.1";
