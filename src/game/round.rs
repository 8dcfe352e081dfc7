//! One round of Tarneeb-41.
//!
//! A round moves through `Dealing -> Bidding -> Playing -> Scoring ->
//! Complete`. When the four bids sum below the configured minimum the deal
//! is thrown in and the round returns to `Dealing` with a fresh deck; the
//! discarded deal leaves no trace on scores.
//!
//! Policy answers are validated before anything is applied. A trick's
//! cards leave the hands only once all four plays have been accepted, so a
//! failed trick never mutates a hand.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::{Card, Deck, Suit};
use crate::core::{EngineError, GameRng, Result, RulesConfig, Seat, SeatMap, SeatState};
use crate::policy::{BidView, PlayView, SeatPolicies};
use crate::rules::{legal_moves, score_delta, Trick, TrickResult};

use super::stats::CardStats;

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    Bidding,
    Playing,
    Scoring,
    Complete,
}

/// Everything that happened in a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number within the game, from 1.
    pub number: u32,
    pub trump: Suit,
    /// Deals needed, including thrown-in ones.
    pub deals: u32,
    pub first_lead: Seat,
    pub bids: SeatMap<u8>,
    pub tricks: Vec<TrickResult>,
    pub tricks_won: SeatMap<u8>,
    pub deltas: SeatMap<i32>,
    /// Scores after applying `deltas`.
    pub scores: SeatMap<i32>,
}

impl RoundResult {
    /// Seats that took at least as many tricks as they bid.
    pub fn made_bid(&self) -> impl Iterator<Item = Seat> + '_ {
        Seat::ALL
            .into_iter()
            .filter(move |&s| self.tricks_won[s] >= self.bids[s])
    }
}

/// Round driver.
#[derive(Debug)]
pub struct Round<'a> {
    config: &'a RulesConfig,
    number: u32,
    phase: RoundPhase,
    first_lead: Seat,
    deals: u32,
    tricks: Vec<TrickResult>,
}

impl<'a> Round<'a> {
    /// Prepare round `number` (1-based) of a game.
    #[must_use]
    pub fn new(config: &'a RulesConfig, number: u32) -> Self {
        Self {
            config,
            number,
            phase: RoundPhase::Dealing,
            first_lead: config.lead_rule.first_lead(number),
            deals: 0,
            tricks: Vec::with_capacity(config.hand_size),
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Deals made so far.
    #[must_use]
    pub fn deals(&self) -> u32 {
        self.deals
    }

    /// Tricks resolved so far.
    #[must_use]
    pub fn tricks(&self) -> &[TrickResult] {
        &self.tricks
    }

    /// Play the round to completion.
    ///
    /// Each deal shuffles a fresh deck from a fork of `rng`. Resolved
    /// tricks are counted into `stats`. On error the round is abandoned
    /// wherever it stood; scores are only touched in the final step.
    pub fn play(
        &mut self,
        seats: &mut SeatMap<SeatState>,
        policies: &mut SeatMap<SeatPolicies>,
        rng: &mut GameRng,
        stats: &mut CardStats,
    ) -> Result<RoundResult> {
        let (trump, bids) = loop {
            let trump = self.deal(seats, rng)?;
            if let Some(bids) = self.collect_bids(trump, seats, policies)? {
                break (trump, bids);
            }
            if let Some(limit) = self.config.max_redeals {
                if self.deals > limit {
                    return Err(EngineError::RedealLimit {
                        attempts: self.deals,
                    });
                }
            }
        };

        self.play_tricks(trump, &bids, seats, policies, stats)?;
        let (deltas, scores) = self.score(&bids, seats);

        self.phase = RoundPhase::Complete;
        info!(
            round = self.number,
            deals = self.deals,
            bids = ?bids.to_vec(),
            deltas = ?deltas.to_vec(),
            scores = ?scores.to_vec(),
            "round complete"
        );

        Ok(RoundResult {
            number: self.number,
            trump,
            deals: self.deals,
            first_lead: self.first_lead,
            bids,
            tricks: std::mem::take(&mut self.tricks),
            tricks_won: seats.map(|s| s.tricks_won),
            deltas,
            scores,
        })
    }

    fn deal(&mut self, seats: &mut SeatMap<SeatState>, rng: &mut GameRng) -> Result<Suit> {
        self.phase = RoundPhase::Dealing;
        self.deals += 1;

        let mut deck = Deck::shuffled(&mut rng.fork());
        let mut dealt: Vec<Card> = Vec::with_capacity(self.config.hand_size * Seat::ALL.len());
        for (_, state) in seats.iter_mut() {
            state.reset_round();
            let hand = deck.deal(self.config.hand_size)?;
            dealt.extend_from_slice(&hand);
            state.hand = hand;
        }

        let trump = self
            .config
            .trump_rule
            .select(&dealt)
            .ok_or_else(|| EngineError::InvalidConfig("empty deal".to_string()))?;
        debug!(round = self.number, deal = self.deals, %trump, "dealt");

        self.phase = RoundPhase::Bidding;
        Ok(trump)
    }

    /// Ask each seat for a bid. `None` means the deal is thrown in.
    fn collect_bids(
        &mut self,
        trump: Suit,
        seats: &mut SeatMap<SeatState>,
        policies: &mut SeatMap<SeatPolicies>,
    ) -> Result<Option<SeatMap<u8>>> {
        for seat in Seat::ALL {
            let view = BidView {
                seat,
                hand: &seats[seat].hand,
                scores: seats.map(|s| s.score),
                trump,
                prior_bids: seats.map(|s| s.bid),
                min_bid: self.config.min_bid,
                max_bid: self.config.max_bid,
            };
            let bid = policies[seat]
                .bidder()
                .bid(&view)
                .map_err(|source| EngineError::Policy { seat, source })?;
            if !self.config.is_valid_bid(bid) {
                return Err(EngineError::InvalidBid { seat, bid });
            }
            debug!(%seat, bid, "bid");
            seats[seat].bid = Some(bid);
        }

        let bids = seats.map(|s| s.bid.unwrap_or_default());
        let sum: u32 = bids.values().map(|&b| u32::from(b)).sum();
        if sum < self.config.min_bid_sum {
            info!(
                round = self.number,
                deal = self.deals,
                sum,
                "bids below minimum, redealing"
            );
            self.phase = RoundPhase::Dealing;
            return Ok(None);
        }

        self.phase = RoundPhase::Playing;
        Ok(Some(bids))
    }

    fn play_tricks(
        &mut self,
        trump: Suit,
        bids: &SeatMap<u8>,
        seats: &mut SeatMap<SeatState>,
        policies: &mut SeatMap<SeatPolicies>,
        stats: &mut CardStats,
    ) -> Result<()> {
        let mut lead = self.first_lead;

        for serial in 1..=self.config.hand_size {
            let mut trick = Trick::new(serial as u8, lead, trump);

            while let Some(seat) = trick.to_play() {
                let hand = &seats[seat].hand;
                let legal = legal_moves(hand, trick.lead_suit());
                let view = PlayView {
                    seat,
                    hand,
                    legal_moves: &legal,
                    trick: trick.plays(),
                    lead,
                    trump,
                    bids: bids.clone(),
                    tricks_won: seats.map(|s| s.tricks_won),
                    scores: seats.map(|s| s.score),
                    completed: &self.tricks,
                };
                let card = policies[seat]
                    .player()
                    .choose(&view)
                    .map_err(|source| EngineError::Policy { seat, source })?;
                if !legal.contains(&card) {
                    return Err(EngineError::IllegalCard { seat, card });
                }
                trace!(%seat, %card, "play");
                trick.push(seat, card)?;
            }

            let result = trick.resolve()?;
            for play in &result.plays {
                let hand = &mut seats[play.seat].hand;
                let pos = hand.iter().position(|&c| c == play.card).ok_or_else(|| {
                    EngineError::malformed(format!("{} no longer holds {}", play.seat, play.card))
                })?;
                hand.remove(pos);
            }

            seats[result.winner].tricks_won += 1;
            stats.record(&result);
            debug!(trick = %result, winner = %result.winner, "trick");

            lead = result.winner;
            self.tricks.push(result);
        }

        self.phase = RoundPhase::Scoring;
        Ok(())
    }

    fn score(
        &mut self,
        bids: &SeatMap<u8>,
        seats: &mut SeatMap<SeatState>,
    ) -> (SeatMap<i32>, SeatMap<i32>) {
        let mut deltas = SeatMap::with_value(0);
        for (seat, state) in seats.iter_mut() {
            let delta = score_delta(self.config, bids[seat], state.tricks_won, state.score);
            state.score += delta;
            deltas[seat] = delta;
        }
        (deltas, seats.map(|s| s.score))
    }
}
