//! Uniform random policy.
//!
//! Bids uniformly in a narrow band above the seat's bid floor, and plays a
//! uniformly chosen legal card. Seeded, so whole games replay exactly.
//!
//! Random play takes about three tricks a round, so the band stays close to
//! that. Bidding across the whole range would lose points on average and
//! scores would drift away from the winning line.

use crate::cards::Card;
use crate::core::GameRng;

use super::traits::{BidView, BiddingPolicy, PlayPolicy, PlayView, PolicyError, SeatPolicies};

/// Lowest sensible bid for a seat holding `score`: a tenth of the score,
/// never below `min_bid` nor above `max_bid`.
#[must_use]
pub fn bid_floor(score: i32, min_bid: u8, max_bid: u8) -> u8 {
    let tenth = (score / 10).clamp(i32::from(min_bid), i32::from(max_bid));
    u8::try_from(tenth).unwrap_or(min_bid)
}

/// Bids above the floor a random seat may reach.
pub const RANDOM_BID_SPREAD: u8 = 2;

/// Random bidding and play.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl SeatPolicies {
    /// Random bidding and play, each drawing from its own fork of `rng`.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(
            RandomPolicy::from_rng(rng.fork()),
            RandomPolicy::from_rng(rng.fork()),
        )
    }
}

impl BiddingPolicy for RandomPolicy {
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError> {
        let floor = bid_floor(view.own_score(), view.min_bid, view.max_bid);
        let top = floor.saturating_add(RANDOM_BID_SPREAD).min(view.max_bid);
        Ok(self.rng.gen_range(floor..=top))
    }
}

impl PlayPolicy for RandomPolicy {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        self.rng
            .choose(view.legal_moves)
            .copied()
            .ok_or_else(|| PolicyError::new("no legal moves offered"))
    }
}
