//! View encoding for network input.
//!
//! Cards are encoded two ways:
//! - as a 4-value vector holding `rank / 14` at the suit's slot, zeros
//!   elsewhere (`card_features`);
//! - as membership in a 52-slot vector indexed by card id (`card_set`).
//!
//! Seat-indexed values (scores, bids) are rotated so the encoding seat
//! comes first.

use crate::cards::{Card, Rank, Suit};
use crate::core::{Seat, SeatMap, SEATS};
use crate::policy::{BidView, PlayView};

use super::traits::EncodedState;

/// Values per card in `card_features`.
pub const CARD_FEATURES: usize = 4;

/// Card slots in a hand encoding.
pub const HAND_SLOTS: usize = 13;

/// Width of a bidding input: card set, scores, bids, trump one-hot.
pub const BID_INPUT: usize = Card::COUNT + 3 * SEATS;

/// Width of a play input: context, hand, up to three played cards.
pub const PLAY_INPUT: usize = CARD_FEATURES * (1 + HAND_SLOTS + 3);

/// Score normaliser.
const SCORE_SCALE: f32 = 41.0;

/// Bid and trick normaliser.
const BID_SCALE: f32 = 13.0;

/// Encodes a view into tensors for network input.
pub trait StateEncoder<V: ?Sized> {
    /// Encode `view` from the acting seat's perspective.
    fn encode(&self, view: &V) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;
}

/// `rank / 14` at the suit's slot.
#[must_use]
pub fn card_features(card: Card) -> [f32; CARD_FEATURES] {
    let mut out = [0.0; CARD_FEATURES];
    out[card.suit.index()] = f32::from(card.rank.value()) / f32::from(Rank::Ace.value());
    out
}

/// 1.0 at the id of every card in `cards`.
#[must_use]
pub fn card_set(cards: &[Card]) -> [f32; Card::COUNT] {
    let mut out = [0.0; Card::COUNT];
    for card in cards {
        out[card.id()] = 1.0;
    }
    out
}

/// Hand sorted high to low, the slot order used by play encodings and
/// [`PlayNetwork`](super::PlayNetwork) outputs.
#[must_use]
pub fn hand_slots(hand: &[Card]) -> Vec<Card> {
    let mut sorted = hand.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.truncate(HAND_SLOTS);
    sorted
}

fn rotated<T: Copy>(values: &SeatMap<T>, seat: Seat) -> impl Iterator<Item = T> + '_ {
    seat.rotation().map(move |s| values[s])
}

fn trump_one_hot(trump: Suit) -> [f32; SEATS] {
    let mut out = [0.0; SEATS];
    out[trump.index()] = 1.0;
    out
}

/// 64-value bidding input.
///
/// | Range  | Content                                   |
/// |--------|-------------------------------------------|
/// | 0..52  | hand as a card set                        |
/// | 52..56 | scores / 41, own seat first               |
/// | 56..60 | prior bids / 13 (0 when unknown)          |
/// | 60..64 | trump one-hot                             |
#[derive(Clone, Copy, Debug, Default)]
pub struct BidEncoder;

impl StateEncoder<BidView<'_>> for BidEncoder {
    fn encode(&self, view: &BidView<'_>) -> EncodedState {
        let mut state = EncodedState::zeros(self.output_shape());
        state.write(0, &card_set(view.hand));

        let scores: Vec<f32> = rotated(&view.scores, view.seat)
            .map(|s| s as f32 / SCORE_SCALE)
            .collect();
        state.write(Card::COUNT, &scores);

        let bids: Vec<f32> = rotated(&view.prior_bids, view.seat)
            .map(|b| b.map_or(0.0, |b| f32::from(b) / BID_SCALE))
            .collect();
        state.write(Card::COUNT + SEATS, &bids);

        state.write(Card::COUNT + 2 * SEATS, &trump_one_hot(view.trump));
        state
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BID_INPUT]
    }
}

/// 68-value playing input.
///
/// | Range  | Content                                              |
/// |--------|------------------------------------------------------|
/// | 0..4   | bid / 13, score / 41, tricks won / bid, reserved 0   |
/// | 4..56  | hand, 13 slots of `card_features`, high to low       |
/// | 56..68 | cards played to the trick, right-aligned             |
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayEncoder;

impl StateEncoder<PlayView<'_>> for PlayEncoder {
    fn encode(&self, view: &PlayView<'_>) -> EncodedState {
        let mut state = EncodedState::zeros(self.output_shape());

        let bid = view.own_bid();
        let ratio = if bid > 0 {
            f32::from(view.own_tricks_won()) / f32::from(bid)
        } else {
            0.0
        };
        state.write(
            0,
            &[
                f32::from(bid) / BID_SCALE,
                view.scores[view.seat] as f32 / SCORE_SCALE,
                ratio,
                0.0,
            ],
        );

        let hand_offset = CARD_FEATURES;
        for (slot, card) in hand_slots(view.hand).into_iter().enumerate() {
            state.write(hand_offset + slot * CARD_FEATURES, &card_features(card));
        }

        let played_offset = hand_offset + HAND_SLOTS * CARD_FEATURES;
        let played = view.cards_played();
        let recent = &played[played.len().saturating_sub(3)..];
        let first_slot = 3 - recent.len();
        for (i, &card) in recent.iter().enumerate() {
            state.write(
                played_offset + (first_slot + i) * CARD_FEATURES,
                &card_features(card),
            );
        }
        state
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![PLAY_INPUT]
    }
}
