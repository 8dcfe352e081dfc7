//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe identifier for one of the four positions at the table.
//! Play rotates clockwise: `Seat(0) -> Seat(1) -> Seat(2) -> Seat(3) -> Seat(0)`.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by an array for O(1) access.
//!
//! ## SeatState
//!
//! Mutable per-seat game state: hand, bid, tricks won, score, games won.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Card;

/// Number of seats at a Tarneeb table.
pub const SEATS: usize = 4;

/// Seat identifier in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// All four seats in rotation order.
    pub const ALL: [Seat; SEATS] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    /// Create a seat, wrapping the index into `0..4`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id % SEATS as u8)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// The seat `steps` positions after this one.
    ///
    /// ```
    /// use tarneeb41::core::Seat;
    ///
    /// assert_eq!(Seat::new(3).offset(2), Seat::new(1));
    /// ```
    #[must_use]
    pub const fn offset(self, steps: usize) -> Self {
        Self(((self.0 as usize + steps) % SEATS) as u8)
    }

    /// Iterate over the four seats starting at `self`.
    pub fn rotation(self) -> impl Iterator<Item = Seat> {
        (0..SEATS).map(move |i| self.offset(i))
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use tarneeb41::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i32> = SeatMap::with_value(0);
/// scores[Seat::new(2)] += 7;
/// assert_eq!(scores.to_vec(), vec![0, 0, 7, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEATS],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a SeatMap from values in seat order.
    pub fn from_array(data: [T; SEATS]) -> Self {
        Self { data }
    }

    /// Create a SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Project every entry through `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(self.get(seat)))
    }

    /// Copy values out in seat order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Mutable state of one seat.
///
/// `score` and `games_won` persist across rounds; `hand`, `bid` and
/// `tricks_won` are reset at the start of every deal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatState {
    /// Cards currently held.
    pub hand: Vec<Card>,
    /// Bid for the current round, once made.
    pub bid: Option<u8>,
    /// Tricks taken in the current round.
    pub tricks_won: u8,
    /// Cumulative score in the current game. May go negative.
    pub score: i32,
    /// Games won since the table was created.
    pub games_won: u32,
}

impl SeatState {
    /// Clear per-round state ahead of a new deal.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.bid = None;
        self.tricks_won = 0;
    }

    /// Clear per-game state, keeping the games-won tally.
    pub fn reset_game(&mut self) {
        self.reset_round();
        self.score = 0;
    }

    /// Whether the hand currently holds `card`.
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}
