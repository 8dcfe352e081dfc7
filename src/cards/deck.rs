//! The 52-card deck.
//!
//! A `Deck` is created fresh for every deal and consumed by dealing. Cards
//! handed out are never returned to the same instance, so at any point
//! `cards() ∪ dealt` is exactly the 52 unique cards.

use tracing::trace;

use super::card::Card;
use crate::core::{EngineError, GameRng, Result};

/// An ordered stack of undealt cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck in canonical order (see [`Card::all`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::all().collect(),
            dealt: 0,
        }
    }

    /// A full deck with a uniform random permutation drawn from `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        rng.shuffle(&mut deck.cards);
        trace!(seed = rng.seed(), "shuffled new deck");
        deck
    }

    /// Remove and return the first `n` cards.
    ///
    /// Fails with `InsufficientCards` and leaves the deck untouched when
    /// fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        self.dealt += n;
        Ok(self.cards.drain(..n).collect())
    }

    /// Undealt cards, next card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that would be dealt last.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards dealt from this instance so far.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.dealt
    }
}
