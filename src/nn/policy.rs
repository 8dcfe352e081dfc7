//! Policies backed by external networks.

use crate::cards::Card;
use crate::policy::{bid_floor, BidView, BiddingPolicy, PlayPolicy, PlayView, PolicyError};

use super::encoder::{hand_slots, BidEncoder, PlayEncoder, StateEncoder};
use super::traits::{BidNetwork, PlayNetwork};

/// Bids from a [`BidNetwork`] prediction.
///
/// The prediction `p` in `[0, 1]` maps to `floor + p * (max - floor)`,
/// truncated, where `floor` is the seat's bid floor. NaN bids the floor.
#[derive(Clone, Debug, Default)]
pub struct NetworkBidder<N> {
    network: N,
}

impl<N: BidNetwork> NetworkBidder<N> {
    pub fn new(network: N) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &N {
        &self.network
    }
}

impl<N: BidNetwork> BiddingPolicy for NetworkBidder<N> {
    fn bid(&mut self, view: &BidView<'_>) -> Result<u8, PolicyError> {
        let floor = bid_floor(view.own_score(), view.min_bid, view.max_bid);
        let p = self.network.predict(&BidEncoder.encode(view));
        if p.is_nan() {
            return Ok(floor);
        }
        let span = f32::from(view.max_bid - floor);
        let bid = floor + (p.clamp(0.0, 1.0) * span) as u8;
        Ok(bid.min(view.max_bid))
    }
}

/// Plays the legal card whose hand slot a [`PlayNetwork`] scores highest.
#[derive(Clone, Debug, Default)]
pub struct NetworkPlayer<N> {
    network: N,
}

impl<N: PlayNetwork> NetworkPlayer<N> {
    pub fn new(network: N) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &N {
        &self.network
    }
}

impl<N: PlayNetwork> PlayPolicy for NetworkPlayer<N> {
    fn choose(&mut self, view: &PlayView<'_>) -> Result<Card, PolicyError> {
        let scores = self.network.predict(&PlayEncoder.encode(view));
        hand_slots(view.hand)
            .into_iter()
            .zip(scores)
            .filter(|(card, score)| view.legal_moves.contains(card) && !score.is_nan())
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(card, _)| card)
            .or_else(|| view.legal_moves.first().copied())
            .ok_or_else(|| PolicyError::new("no legal moves offered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::{Seat, SeatMap};
    use crate::nn::{ConstantBid, EncodedState};

    fn bid_view(hand: &[Card], score: i32) -> BidView<'_> {
        BidView {
            seat: Seat::new(0),
            hand,
            scores: SeatMap::from_array([score, 0, 0, 0]),
            trump: Suit::Clubs,
            prior_bids: SeatMap::with_value(None),
            min_bid: 2,
            max_bid: 13,
        }
    }

    #[test]
    fn test_network_bid_scales_prediction() {
        let hand: Vec<Card> = Card::all().take(13).collect();
        assert_eq!(NetworkBidder::new(ConstantBid(0.0)).bid(&bid_view(&hand, 0)).unwrap(), 2);
        assert_eq!(NetworkBidder::new(ConstantBid(1.0)).bid(&bid_view(&hand, 0)).unwrap(), 13);
        assert_eq!(NetworkBidder::new(ConstantBid(0.5)).bid(&bid_view(&hand, 0)).unwrap(), 7);
        assert_eq!(NetworkBidder::new(ConstantBid(f32::NAN)).bid(&bid_view(&hand, 35)).unwrap(), 3);
    }

    struct Fixed(Vec<f32>);

    impl PlayNetwork for Fixed {
        fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
            self.0.clone()
        }
    }

    #[test]
    fn test_network_play_picks_best_legal_slot() {
        let hand: Vec<Card> = ["2c", "Ah", "Kh"].iter().map(|s| s.parse().unwrap()).collect();
        let legal = vec![hand[1], hand[2]];
        let view = PlayView {
            seat: Seat::new(0),
            hand: &hand,
            legal_moves: &legal,
            trick: &[],
            lead: Seat::new(0),
            trump: Suit::Spades,
            bids: SeatMap::with_value(3),
            tricks_won: SeatMap::with_value(0),
            scores: SeatMap::with_value(0),
            completed: &[],
        };

        // Slots are Ah, Kh, 2c. The illegal 2c slot scores highest.
        let mut player = NetworkPlayer::new(Fixed(vec![0.1, 0.7, 0.9]));
        assert_eq!(player.choose(&view).unwrap(), hand[2]);

        let mut player = NetworkPlayer::new(Fixed(vec![f32::NAN, f32::NAN, 1.0]));
        assert_eq!(player.choose(&view).unwrap(), legal[0]);
    }
}
