//! Decision-policy contracts.
//!
//! The engine asks a seat's [`BiddingPolicy`] for a bid and its
//! [`PlayPolicy`] for a card. Each call receives a read-only view built for
//! that seat; the engine validates the answer and applies it only after the
//! call returns, so no seat state changes while a policy is deciding.

use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{Card, Suit};
use crate::core::{Seat, SeatMap, SEATS};
use crate::rules::{Play, TrickResult};

/// Failure reported by a policy implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PolicyError {
    message: String,
}

impl PolicyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What a seat sees when bidding.
#[derive(Clone, Debug)]
pub struct BidView<'a> {
    pub seat: Seat,
    /// The seat's 13 cards.
    pub hand: &'a [Card],
    /// Cumulative scores of all seats before this round.
    pub scores: SeatMap<i32>,
    pub trump: Suit,
    /// Bids made so far this round; `None` for seats yet to bid.
    pub prior_bids: SeatMap<Option<u8>>,
    /// Legal bid range.
    pub min_bid: u8,
    pub max_bid: u8,
}

impl BidView<'_> {
    #[must_use]
    pub fn own_score(&self) -> i32 {
        self.scores[self.seat]
    }
}

/// What a seat sees when choosing a card.
#[derive(Clone, Debug)]
pub struct PlayView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    /// Non-empty subset of `hand` the seat may play.
    pub legal_moves: &'a [Card],
    /// Plays already made to the current trick (0 to 3).
    pub trick: &'a [Play],
    /// Seat that led the current trick.
    pub lead: Seat,
    pub trump: Suit,
    pub bids: SeatMap<u8>,
    pub tricks_won: SeatMap<u8>,
    pub scores: SeatMap<i32>,
    /// Tricks already resolved this round.
    pub completed: &'a [TrickResult],
}

impl PlayView<'_> {
    #[must_use]
    pub fn own_bid(&self) -> u8 {
        self.bids[self.seat]
    }

    #[must_use]
    pub fn own_tricks_won(&self) -> u8 {
        self.tricks_won[self.seat]
    }

    /// Cards played to the current trick, in order.
    #[must_use]
    pub fn cards_played(&self) -> SmallVec<[Card; SEATS]> {
        self.trick.iter().map(|p| p.card).collect()
    }

    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.trick.first().map(|p| p.card.suit)
    }
}

/// Chooses a bid.
pub trait BiddingPolicy {
    /// Return a bid in `[view.min_bid, view.max_bid]`.
    ///
    /// Out-of-range answers fail the round with `InvalidBid`; the engine
    /// never clamps.
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError>;
}

/// Chooses a card to play.
pub trait PlayPolicy {
    /// Return one of `view.legal_moves`.
    ///
    /// Any other card fails the round with `IllegalCard`; the engine never
    /// substitutes.
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError>;
}

impl<B: BiddingPolicy + ?Sized> BiddingPolicy for Box<B> {
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError> {
        (**self).bid(view)
    }
}

impl<P: PlayPolicy + ?Sized> PlayPolicy for Box<P> {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        (**self).choose(view)
    }
}

/// The bidding and playing policies driving one seat.
pub struct SeatPolicies {
    bidder: Box<dyn BiddingPolicy>,
    player: Box<dyn PlayPolicy>,
}

impl SeatPolicies {
    pub fn new(bidder: impl BiddingPolicy + 'static, player: impl PlayPolicy + 'static) -> Self {
        Self {
            bidder: Box::new(bidder),
            player: Box::new(player),
        }
    }

    pub fn bidder(&mut self) -> &mut dyn BiddingPolicy {
        self.bidder.as_mut()
    }

    pub fn player(&mut self) -> &mut dyn PlayPolicy {
        self.player.as_mut()
    }
}

impl std::fmt::Debug for SeatPolicies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatPolicies").finish_non_exhaustive()
    }
}

/// Resolves a round in which several seats reached the winning score.
pub trait TieBreaker {
    /// Pick the winner among `contenders`, or `None` to leave it ambiguous.
    fn break_tie(&mut self, contenders: &[Seat], scores: &SeatMap<i32>) -> Option<Seat>;
}

/// Awards a contested game to the unique highest score.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestScore;

impl TieBreaker for HighestScore {
    fn break_tie(&mut self, contenders: &[Seat], scores: &SeatMap<i32>) -> Option<Seat> {
        let top = contenders.iter().map(|&s| scores[s]).max()?;
        let mut leaders = contenders.iter().copied().filter(|&s| scores[s] == top);
        let leader = leaders.next()?;
        leaders.next().is_none().then_some(leader)
    }
}
