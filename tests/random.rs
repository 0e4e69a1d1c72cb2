//! # Random and Today Command Tests
//!
//! Tests for `qd random`, `qd today`, and the daily selection determinism.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use chrono::NaiveDate;
use common::setup_with_quotes;
use quotedeck::commands::{self, RandomArgs};
use quotedeck::quote::pick;

const QUOTES: &[&str] = &[
    "Be yourself; everyone else is already taken. | Oscar Wilde | | humor, wisdom",
    "The unexamined life is not worth living. | Socrates | Apology | wisdom",
    "Less is more. | Mies van der Rohe | | design",
];

#[test]
fn test_random() {
    let _env = setup_with_quotes(QUOTES);

    commands::random(None, &RandomArgs::default()).expect("random should succeed");
}

#[test]
fn test_random_with_tag_filter() {
    let _env = setup_with_quotes(QUOTES);

    let args = RandomArgs {
        tags: Some("design".to_string()),
        keyword: None,
    };
    commands::random(None, &args).expect("random -t should succeed");
}

#[test]
fn test_random_on_empty_collection_is_friendly() {
    let _env = setup_with_quotes(&["# no quotes yet"]);

    // An empty collection prints a message instead of failing
    commands::random(None, &RandomArgs::default()).expect("random on empty file should not error");
}

#[test]
fn test_random_with_unmatched_filter_is_friendly() {
    let _env = setup_with_quotes(QUOTES);

    let args = RandomArgs {
        tags: Some("nonexistent".to_string()),
        keyword: None,
    };
    commands::random(None, &args).expect("random with no matches should not error");
}

#[test]
fn test_today() {
    let _env = setup_with_quotes(QUOTES);

    commands::today(None).expect("today should succeed");
}

#[test]
fn test_daily_selection_is_stable_within_a_day() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

    let first = pick::daily_index_for(date, QUOTES.len()).unwrap();
    for _ in 0..10 {
        assert_eq!(pick::daily_index_for(date, QUOTES.len()).unwrap(), first);
    }
}

#[test]
fn test_daily_selection_changes_across_days() {
    // With more days than quotes, at least two consecutive days must differ.
    let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let picks: Vec<usize> = (0..4)
        .map(|offset| {
            pick::daily_index_for(start + chrono::Days::new(offset), QUOTES.len()).unwrap()
        })
        .collect();

    assert!(picks.windows(2).any(|pair| pair[0] != pair[1]));
}
