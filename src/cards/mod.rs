//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: enumerated card faces
//! - `Card`: immutable `(rank, suit)` value with a stable id in `0..52`
//! - `Deck`: the 52 unique cards, shuffled from a seeded `GameRng` and
//!   consumed by dealing

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
