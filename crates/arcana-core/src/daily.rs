//! Deterministic daily card selection.
//!
//! The calendar date is formatted as a `YYYY-MM-DD` key and hashed with a
//! base-31 polynomial over its bytes. The hash lives in `u32` and every
//! step uses wrapping multiplication and addition, which is exactly
//! arithmetic modulo 2^32. The card is the deck entry at
//! `hash % deck.len()`, so everyone sees the same card on the same date.

use chrono::{Datelike, NaiveDate};

use crate::data::{DECK, TarotCard};

/// Multiplier of the polynomial hash.
const HASH_MULTIPLIER: u32 = 31;

/// Format a date as the fixed-width `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Hash a date key: `hash = (hash * 31 + byte) mod 2^32`, left to right.
pub fn daily_hash(key: &str) -> u32 {
    key.bytes().fold(0u32, |hash, b| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(b))
    })
}

/// Deck index for a date in a deck of `deck_len` cards.
///
/// `deck_len` must be non-zero.
pub fn daily_index(date: NaiveDate, deck_len: usize) -> usize {
    daily_hash(&date_key(date)) as usize % deck_len
}

/// The daily card for a date.
pub fn daily_card(date: NaiveDate) -> &'static TarotCard {
    &DECK[daily_index(date, DECK.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_is_zero_padded() {
        assert_eq!(date_key(ymd(2024, 3, 5)), "2024-03-05");
        assert_eq!(date_key(ymd(987, 1, 1)), "0987-01-01");
    }

    #[test]
    fn regression_fixture() {
        assert_eq!(daily_hash("2024-03-05"), 3_681_685_250);
        assert_eq!(daily_index(ymd(2024, 3, 5), DECK.len()), 0);
        assert_eq!(daily_card(ymd(2024, 3, 5)).id, "fool");
    }

    #[test]
    fn hash_wraps_at_u32() {
        // Wraps past u32::MAX several times along the key.
        assert_eq!(daily_hash("2025-01-01"), 274_162_049);
        assert_eq!(daily_card(ymd(2025, 1, 1)).id, "wheel");
    }

    #[test]
    fn rollover_and_leap_days() {
        assert_eq!(daily_card(ymd(2024, 12, 31)).id, "wheel");
        assert_eq!(daily_card(ymd(2024, 2, 29)).id, "lovers");
    }

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(daily_hash(""), 0);
    }

    #[test]
    fn every_index_reachable_within_a_year() {
        let start = ymd(2024, 1, 1);
        let seen: HashSet<usize> = start
            .iter_days()
            .take(366)
            .map(|d| daily_index(d, DECK.len()))
            .collect();
        assert_eq!(seen.len(), DECK.len(), "unreachable indices: {seen:?}");
    }

    proptest! {
        #[test]
        fn same_date_same_card(days in 0u64..200_000) {
            let date = ymd(1900, 1, 1) + chrono::Days::new(days);
            prop_assert_eq!(daily_card(date), daily_card(date));
            prop_assert!(daily_index(date, DECK.len()) < DECK.len());
        }
    }
}
