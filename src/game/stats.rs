//! Card statistics: how often each rank is played and wins, split by trump.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;
use crate::rules::TrickResult;

/// Classification of one played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub rank: Rank,
    /// Card was of the trump suit.
    pub trump: bool,
    /// Card won its trick.
    pub won: bool,
}

impl fmt::Display for CardKey {
    /// `14`, `14-W`, `T-14`, `T-14-W`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trump {
            f.write_str("T-")?;
        }
        write!(f, "{}", self.rank.value())?;
        if self.won {
            f.write_str("-W")?;
        }
        Ok(())
    }
}

/// Play counts per [`CardKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStats {
    counts: FxHashMap<CardKey, u32>,
    tricks: u32,
}

impl CardStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the four cards of a resolved trick.
    pub fn record(&mut self, trick: &TrickResult) {
        for card in trick.cards() {
            let key = CardKey {
                rank: card.rank,
                trump: card.suit == trick.trump,
                won: card == trick.winning_card,
            };
            *self.counts.entry(key).or_insert(0) += 1;
        }
        self.tricks += 1;
    }

    #[must_use]
    pub fn count(&self, key: CardKey) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Tricks recorded.
    #[must_use]
    pub fn tricks(&self) -> u32 {
        self.tricks
    }

    /// Fraction of plays of `rank` (trump or not) that won their trick.
    #[must_use]
    pub fn win_rate(&self, rank: Rank, trump: bool) -> f64 {
        let won = self.count(CardKey { rank, trump, won: true });
        let lost = self.count(CardKey { rank, trump, won: false });
        if won + lost == 0 {
            0.0
        } else {
            f64::from(won) / f64::from(won + lost)
        }
    }

    /// All non-zero counts, sorted by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(CardKey, u32)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_unstable();
        entries
    }

    /// Add another set of counts into this one.
    pub fn merge(&mut self, other: &CardStats) {
        for (&key, &count) in &other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
        self.tricks += other.tricks;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
