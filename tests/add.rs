//! # Add Command Tests
//!
//! Tests for the `qd add` command.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::setup_with_quotes;
use quotedeck::commands::{self, AddArgs};

#[test]
fn test_add_simple_format() {
    let env = setup_with_quotes(&["Existing. | | |"]);

    let args = AddArgs {
        quote: "Less is more. - Mies van der Rohe".to_string(),
        extended: false,
    };
    commands::add(None, &args).expect("add should succeed");

    let content = env.read_quote_file();
    assert!(content.contains("Less is more. | Mies van der Rohe |  | "));
    assert!(content.contains("Existing."));
}

#[test]
fn test_add_simple_format_with_publication() {
    let env = setup_with_quotes(&["Existing. | | |"]);

    let args = AddArgs {
        quote: "The secret of getting ahead is getting started. - Mark Twain (Autobiography)"
            .to_string(),
        extended: false,
    };
    commands::add(None, &args).expect("add should succeed");

    let content = env.read_quote_file();
    assert!(content.contains("| Mark Twain | Autobiography | "));
}

#[test]
fn test_add_extended_format_with_tags() {
    let env = setup_with_quotes(&["Existing. | | |"]);

    let args = AddArgs {
        quote: "Less is more.|Mies van der Rohe||design, architecture".to_string(),
        extended: true,
    };
    commands::add(None, &args).expect("add should succeed");

    // Tags come back sorted
    let content = env.read_quote_file();
    assert!(content.contains("Less is more. | Mies van der Rohe |  | architecture, design"));
}

#[test]
fn test_add_rejects_duplicate() {
    let env = setup_with_quotes(&["Less is more. | Mies van der Rohe | |"]);

    let args = AddArgs {
        quote: "Less is more. - Somebody Else".to_string(),
        extended: false,
    };
    assert!(commands::add(None, &args).is_err());

    // Only the original quote remains
    let content = env.read_quote_file();
    assert_eq!(content.matches("Less is more.").count(), 1);
}

#[test]
fn test_add_rejects_simple_format_without_author() {
    let _env = setup_with_quotes(&["Existing. | | |"]);

    let args = AddArgs {
        quote: "an unattributed quote with no hyphen".to_string(),
        extended: false,
    };
    assert!(commands::add(None, &args).is_err());
}

#[test]
fn test_add_to_explicit_quotefile() {
    let env = setup_with_quotes(&["Default file quote. | | |"]);

    let other = env.home_dir.path().join("other.txt");
    env.write_quote_file_at(&other, &["Other file quote. | | |"]);

    let args = AddArgs {
        quote: "Festina lente. - Augustus".to_string(),
        extended: false,
    };
    commands::add(Some(other.clone()), &args).expect("add should succeed");

    let other_content = std::fs::read_to_string(&other).unwrap();
    assert!(other_content.contains("Festina lente."));

    // The default file is untouched
    assert!(!env.read_quote_file().contains("Festina lente."));
}

#[test]
fn test_add_fails_when_quote_file_missing() {
    let env = setup_with_quotes(&["Existing. | | |"]);
    std::fs::remove_file(env.quote_path()).unwrap();

    let args = AddArgs {
        quote: "Hello. - World".to_string(),
        extended: false,
    };
    assert!(commands::add(None, &args).is_err());
}
