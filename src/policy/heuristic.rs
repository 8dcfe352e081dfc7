//! Deterministic heuristic policy.
//!
//! Bidding counts honours and trump length:
//! - Ace 1 trick, King 0.7 when guarded, Queen 0.35 with two guards.
//! - Every trump beyond the third is worth a trick.
//! - Short side suits add ruffing value when trumps are held.
//!
//! Play is bid-aware:
//! - Still short of the bid: win as cheaply as possible, else discard low.
//! - Bid made: play low and avoid taking tricks.
//! - On lead: lead the highest card while short of the bid, low otherwise.
//!
//! "Low" always prefers non-trump cards so trumps are kept for ruffing.

use std::cmp::Reverse;

use crate::cards::{Card, Rank, Suit};
use crate::rules::beats;

use super::random::bid_floor;
use super::traits::{BidView, BiddingPolicy, PlayPolicy, PlayView, PolicyError, SeatPolicies};

#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Expected tricks for `hand` with `trump`.
    #[must_use]
    pub fn estimate_tricks(hand: &[Card], trump: Suit) -> f32 {
        let suit_len = |suit: Suit| hand.iter().filter(|c| c.suit == suit).count();
        let trumps = suit_len(trump);

        let honours: f32 = hand
            .iter()
            .map(|card| {
                let len = suit_len(card.suit);
                match card.rank {
                    Rank::Ace => 1.0,
                    Rank::King if len >= 2 => 0.7,
                    Rank::Queen if len >= 3 => 0.35,
                    _ => 0.0,
                }
            })
            .sum();

        let length = trumps.saturating_sub(3) as f32;

        let ruffs = if trumps >= 2 {
            Suit::ALL
                .into_iter()
                .filter(|&s| s != trump)
                .map(|s| match suit_len(s) {
                    0 => 1.0,
                    1 => 0.5,
                    _ => 0.0,
                })
                .sum()
        } else {
            0.0
        };

        honours + length + ruffs
    }
}

impl SeatPolicies {
    #[must_use]
    pub fn heuristic() -> Self {
        Self::new(HeuristicPolicy, HeuristicPolicy)
    }
}

/// Cheapest card of `cards`: non-trump first, then low rank.
fn cheapest(cards: impl Iterator<Item = Card>, trump: Suit) -> Option<Card> {
    cards.min_by_key(|c| (c.suit == trump, c.rank))
}

impl BiddingPolicy for HeuristicPolicy {
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError> {
        let floor = bid_floor(view.own_score(), view.min_bid, view.max_bid);
        let estimate = Self::estimate_tricks(view.hand, view.trump).round() as u8;
        Ok(estimate.clamp(floor, view.max_bid))
    }
}

impl PlayPolicy for HeuristicPolicy {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        let trump = view.trump;
        let legal = view.legal_moves;
        let need_tricks = view.own_tricks_won() < view.own_bid();

        let choice = match view.trick.first() {
            None if need_tricks => legal
                .iter()
                .copied()
                .max_by_key(|&c| (c.rank, Reverse(c.suit == trump))),
            None => cheapest(legal.iter().copied(), trump),
            Some(first) => {
                let holder = view.trick.iter().skip(1).fold(first.card, |best, play| {
                    if beats(play.card, best, trump) {
                        play.card
                    } else {
                        best
                    }
                });
                let winning = cheapest(
                    legal.iter().copied().filter(|&c| beats(c, holder, trump)),
                    trump,
                );
                match winning {
                    Some(card) if need_tricks => Some(card),
                    _ => cheapest(
                        legal.iter().copied().filter(|&c| !beats(c, holder, trump)),
                        trump,
                    )
                    .or_else(|| cheapest(legal.iter().copied(), trump)),
                }
            }
        };

        choice.ok_or_else(|| PolicyError::new("no legal moves offered"))
    }
}
