//! Suit-following legality.

use crate::cards::{Card, Suit};

/// Whether `hand` holds any card of `suit`.
#[must_use]
pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Cards `hand` may play into a trick whose lead suit is `lead`.
///
/// With no lead yet, or no card of the lead suit in hand, the whole hand is
/// legal (trump included). Otherwise only lead-suit cards are. Hand order
/// is preserved.
#[must_use]
pub fn legal_moves(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    match lead {
        Some(suit) if hand_has_suit(hand, suit) => {
            hand.iter().copied().filter(|c| c.suit == suit).collect()
        }
        _ => hand.to_vec(),
    }
}

/// Whether `card` is a legal play from `hand` under `lead`.
#[must_use]
pub fn is_legal(hand: &[Card], lead: Option<Suit>, card: Card) -> bool {
    hand.contains(&card)
        && match lead {
            Some(suit) => card.suit == suit || !hand_has_suit(hand, suit),
            None => true,
        }
}
