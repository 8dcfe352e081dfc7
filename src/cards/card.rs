//! Playing cards: rank, suit, and trump-aware comparison.
//!
//! `Card` is a plain `Copy` value. Its `Ord` impl (rank, then suit) exists
//! for stable sorting only; trick winners are decided by
//! [`crate::rules::resolve_trick`], never by comparing cards pairwise.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card suit. The declaration order is the suit index used by card ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Spades,
    Hearts,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    /// Suit index in `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit from its index, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Hearts),
            _ => None,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, valued 2 through 14 (Ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Face value in `2..=14`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its face value, if in range.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(2)
            .and_then(|i| Rank::ALL.get(i as usize))
            .copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Cards in a full deck.
    pub const COUNT: usize = 52;

    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Stable integer identity in `0..52`: `4 * (rank - 2) + suit_index`.
    ///
    /// Used by array encodings; game logic never looks at it.
    #[must_use]
    pub const fn id(self) -> usize {
        4 * (self.rank.value() as usize - 2) + self.suit.index()
    }

    /// Inverse of [`Card::id`].
    #[must_use]
    pub fn from_id(id: usize) -> Option<Card> {
        if id >= Self::COUNT {
            return None;
        }
        let rank = Rank::ALL[id / 4];
        let suit = Suit::from_index(id % 4)?;
        Some(Card::new(rank, suit))
    }

    /// Compare two cards for trick purposes under `trump`.
    ///
    /// - Same suit: higher rank is greater.
    /// - Different suits, exactly one trump: the trump card is greater.
    /// - Different suits, neither trump: `None`, the cards are incomparable
    ///   without knowing the lead.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use tarneeb41::cards::{Card, Rank, Suit};
    ///
    /// let two_trump = Card::new(Rank::Two, Suit::Spades);
    /// let ace = Card::new(Rank::Ace, Suit::Hearts);
    /// assert_eq!(two_trump.compare_trump(&ace, Suit::Spades), Some(Ordering::Greater));
    /// assert_eq!(ace.compare_trump(&two_trump, Suit::Clubs), None);
    /// ```
    #[must_use]
    pub fn compare_trump(&self, other: &Card, trump: Suit) -> Option<Ordering> {
        if self.suit == other.suit {
            return Some(self.rank.cmp(&other.rank));
        }
        match (self.suit == trump, other.suit == trump) {
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            _ => None,
        }
    }

    /// Every card in canonical deck order (Aces first, suits in index order).
    pub fn all() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .rev()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Error parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse card from {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"A♠"`, `"10h"`, `"qd"` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let trimmed = s.trim();
        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "T" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(err)?,
        };
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_formula() {
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).id(), 0);
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).id(), 3);
        assert_eq!(Card::new(Rank::Three, Suit::Diamonds).id(), 5);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).id(), 51);
    }

    #[test]
    fn test_card_id_roundtrip_covers_deck() {
        let mut seen = [false; Card::COUNT];
        for card in Card::all() {
            assert_eq!(Card::from_id(card.id()), Some(card));
            seen[card.id()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Card::from_id(52), None);
    }

    #[test]
    fn test_canonical_order_starts_with_aces() {
        let cards: Vec<_> = Card::all().collect();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[3], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(cards[51], Card::new(Rank::Two, Suit::Hearts));
    }

    #[test]
    fn test_ordering_is_rank_then_suit() {
        let two_hearts = Card::new(Rank::Two, Suit::Hearts);
        let three_clubs = Card::new(Rank::Three, Suit::Clubs);
        let three_spades = Card::new(Rank::Three, Suit::Spades);

        assert!(two_hearts < three_clubs);
        assert!(three_clubs < three_spades);
    }

    #[test]
    fn test_compare_trump() {
        let trump = Suit::Diamonds;
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let twos = Card::new(Rank::Two, Suit::Spades);

        assert_eq!(ad.compare_trump(&kd, trump), Some(Ordering::Greater));
        assert_eq!(kd.compare_trump(&ac, trump), Some(Ordering::Greater));
        assert_eq!(ac.compare_trump(&kd, trump), Some(Ordering::Less));
        assert_eq!(ac.compare_trump(&twos, trump), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).to_string(), "J♣");
        assert_eq!(Card::new(Rank::Seven, Suit::Spades).to_string(), "7♠");
    }

    #[test]
    fn test_parse() {
        assert_eq!("A♠".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("qD".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));
        assert_eq!(" 2c ".parse::<Card>(), Ok(Card::new(Rank::Two, Suit::Clubs)));
        assert!("1c".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }
}
