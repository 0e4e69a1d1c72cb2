//! # Quote Selection
//!
//! Random and deterministic-daily index selection over a quote collection.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{Local, NaiveDate};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::constants::{DAILY_EPOCH, DAILY_SHUFFLE_SEED};

/// Picks a uniformly random index into a collection of `count` quotes using
/// system entropy. Returns `None` for an empty collection.
pub fn random_index(count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(rand::rng().random_range(0..count))
}

/// Picks today's index for the quote-of-the-day rotation.
///
/// Deterministic for a given calendar day and collection size; see
/// [`daily_index_for`].
pub fn daily_index(count: usize) -> Option<usize> {
    daily_index_for(Local::now().date_naive(), count)
}

/// Picks the daily index for an arbitrary date.
///
/// The indices `0..count` are shuffled with a fixed seed and the entry at
/// `days_since_epoch % count` is returned, so consecutive days walk through
/// the whole collection in a scrambled order before repeating. Returns `None`
/// for an empty collection.
pub fn daily_index_for(date: NaiveDate, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let (year, month, day) = DAILY_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let days = (date - epoch).num_days();

    let mut indices: Vec<usize> = (0..count).collect();
    let mut rng = StdRng::seed_from_u64(DAILY_SHUFFLE_SEED);
    indices.shuffle(&mut rng);

    let len = i64::try_from(count).unwrap_or(i64::MAX);
    let position = usize::try_from(days.rem_euclid(len)).unwrap_or(0);
    Some(indices[position])
}
