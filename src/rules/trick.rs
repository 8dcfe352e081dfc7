//! Trick resolution.
//!
//! A trick is four cards played in seat rotation from the lead seat. The
//! winner is found by a single left-to-right scan that keeps a provisional
//! winner:
//!
//! 1. The first card is the provisional winner (its suit is the lead suit).
//! 2. A later card takes over iff it is the same suit as the provisional
//!    winner and strictly higher, or it is trump and the provisional winner
//!    is not.
//!
//! A card of neither the provisional winner's suit nor trump can never take
//! over. The scan needs the play order and cannot be replaced by sorting
//! with pairwise comparisons.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::cards::{Card, Suit};
use crate::core::{EngineError, Result, Seat, SEATS};

/// One card played by one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// Position (in play order) and card of a trick's winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrickWinner {
    pub index: usize,
    pub card: Card,
}

/// Whether `challenger`, played after `incumbent`, takes the trick from it.
#[must_use]
pub fn beats(challenger: Card, incumbent: Card, trump: Suit) -> bool {
    (challenger.suit == incumbent.suit && challenger.rank > incumbent.rank)
        || (challenger.suit == trump && incumbent.suit != trump)
}

/// Resolve four cards, given in play order, under `trump`.
///
/// Fails with `MalformedTrick` unless exactly four distinct cards are given.
///
/// ```
/// use tarneeb41::cards::{Card, Rank, Suit};
/// use tarneeb41::rules::resolve_trick;
///
/// let cards = [
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Two, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ];
/// let winner = resolve_trick(&cards, Suit::Spades).unwrap();
/// assert_eq!(winner.index, 2);
/// ```
pub fn resolve_trick(cards: &[Card], trump: Suit) -> Result<TrickWinner> {
    if cards.len() != SEATS {
        return Err(EngineError::malformed(format!(
            "expected {SEATS} cards, got {}",
            cards.len()
        )));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(EngineError::malformed(format!("{card} played twice")));
        }
    }

    let mut winner = TrickWinner {
        index: 0,
        card: cards[0],
    };
    for (index, &card) in cards.iter().enumerate().skip(1) {
        if beats(card, winner.card, trump) {
            winner = TrickWinner { index, card };
        }
    }
    Ok(winner)
}

/// A trick being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trick {
    serial: u8,
    lead: Seat,
    trump: Suit,
    plays: SmallVec<[Play; SEATS]>,
}

impl Trick {
    /// Start trick number `serial` (1-based), led by `lead`.
    #[must_use]
    pub fn new(serial: u8, lead: Seat, trump: Suit) -> Self {
        Self {
            serial,
            lead,
            trump,
            plays: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn serial(&self) -> u8 {
        self.serial
    }

    #[must_use]
    pub fn lead(&self) -> Seat {
        self.lead
    }

    #[must_use]
    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// Suit of the first card, once played.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    /// Seat due to play next, or `None` when complete.
    #[must_use]
    pub fn to_play(&self) -> Option<Seat> {
        (!self.is_complete()).then(|| self.lead.offset(self.plays.len()))
    }

    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Cards played so far, in order.
    #[must_use]
    pub fn cards(&self) -> SmallVec<[Card; SEATS]> {
        self.plays.iter().map(|p| p.card).collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    /// The play currently holding the trick.
    #[must_use]
    pub fn provisional_winner(&self) -> Option<Play> {
        let mut iter = self.plays.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |best, play| {
            if beats(play.card, best.card, self.trump) {
                play
            } else {
                best
            }
        }))
    }

    /// Record `seat` playing `card`.
    ///
    /// Fails with `MalformedTrick` when `seat` is out of rotation, the trick
    /// is already full, or `card` was already played to it.
    pub fn push(&mut self, seat: Seat, card: Card) -> Result<()> {
        let expected = self
            .to_play()
            .ok_or_else(|| EngineError::malformed("trick already has four cards"))?;
        if seat != expected {
            return Err(EngineError::malformed(format!(
                "{seat} played out of turn, {expected} was due"
            )));
        }
        if self.plays.iter().any(|p| p.card == card) {
            return Err(EngineError::malformed(format!("{card} played twice")));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// Resolve the completed trick.
    pub fn resolve(self) -> Result<TrickResult> {
        let winner = resolve_trick(&self.cards(), self.trump)?;
        Ok(TrickResult {
            serial: self.serial,
            lead: self.lead,
            trump: self.trump,
            winner: self.plays[winner.index].seat,
            winning_card: winner.card,
            plays: self.plays,
        })
    }
}

/// An immutable, resolved trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResult {
    /// Trick number within the round, from 1.
    pub serial: u8,
    pub lead: Seat,
    pub trump: Suit,
    /// The four plays in order.
    pub plays: SmallVec<[Play; SEATS]>,
    pub winner: Seat,
    pub winning_card: Card,
}

impl TrickResult {
    /// Suit of the first play; `None` only for a result with no plays.
    #[must_use]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    /// Card played by `seat`.
    #[must_use]
    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.plays.iter().find(|p| p.seat == seat).map(|p| p.card)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|p| p.card)
    }
}

impl fmt::Display for TrickResult {
    /// `serial [seat:card ...]` with the winning card in parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.serial)?;
        for (i, play) in self.plays.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if play.card == self.winning_card {
                write!(f, "{}:({})", play.seat.0, play.card)?;
            } else {
                write!(f, "{}:{}", play.seat.0, play.card)?;
            }
        }
        f.write_str("]")
    }
}
