//! Round scoring.
//!
//! A seat that makes its bid gains the bid; one that falls short loses it.
//! Bids at or above the doubling threshold count double while the bidder's
//! score is still below the doubling ceiling.

use crate::core::RulesConfig;

/// Points at stake for `bid` given the bidder's score before the round.
#[must_use]
pub fn base_points(config: &RulesConfig, bid: u8, score: i32) -> i32 {
    let bid = i32::from(bid);
    if bid >= i32::from(config.double_bid_threshold) && score < config.double_score_ceiling {
        bid * 2
    } else {
        bid
    }
}

/// Score change for a seat that bid `bid`, took `won` tricks, and held
/// `score` before the round.
#[must_use]
pub fn score_delta(config: &RulesConfig, bid: u8, won: u8, score: i32) -> i32 {
    let points = base_points(config, bid, score);
    if won >= bid {
        points
    } else {
        -points
    }
}
