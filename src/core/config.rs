//! Rules configuration.
//!
//! `RulesConfig` carries every numeric constant of Tarneeb-41 plus the
//! replaceable conventions (trump selection, first lead). Defaults are the
//! standard game; builders override individual values.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::seat::Seat;
use crate::cards::{Card, Suit};

/// How the trump suit of a round is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrumpRule {
    /// Suit of the last card of the full deal.
    #[default]
    LastDealtCard,
    /// The same suit every round.
    Fixed(Suit),
}

impl TrumpRule {
    /// Pick the trump for a deal, given the cards in deal order.
    ///
    /// Returns `None` only for an empty deal.
    #[must_use]
    pub fn select(self, dealt: &[Card]) -> Option<Suit> {
        match self {
            TrumpRule::LastDealtCard => dealt.last().map(|c| c.suit),
            TrumpRule::Fixed(suit) => Some(suit),
        }
    }
}

/// Who leads the first trick of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadRule {
    /// The same seat every round.
    Fixed(Seat),
    /// Starts at seat 0 and moves one seat per round.
    Rotating,
}

impl Default for LeadRule {
    fn default() -> Self {
        LeadRule::Fixed(Seat::new(0))
    }
}

impl LeadRule {
    /// First leader for the given 1-based round number.
    #[must_use]
    pub fn first_lead(self, round_number: u32) -> Seat {
        match self {
            LeadRule::Fixed(seat) => seat,
            LeadRule::Rotating => {
                Seat::new(0).offset(round_number.saturating_sub(1) as usize)
            }
        }
    }
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Score that ends the game.
    pub winning_score: i32,

    /// Lowest legal bid.
    pub min_bid: u8,

    /// Highest legal bid.
    pub max_bid: u8,

    /// Minimum sum of the four bids for a round to be played.
    pub min_bid_sum: u32,

    /// Bids at or above this are doubled while the bidder is below
    /// `double_score_ceiling`.
    pub double_bid_threshold: u8,

    /// Doubling applies only to scores strictly below this.
    pub double_score_ceiling: i32,

    /// Cards dealt to each seat.
    pub hand_size: usize,

    /// Trump selection convention.
    pub trump_rule: TrumpRule,

    /// First-lead convention.
    pub lead_rule: LeadRule,

    /// Consecutive redeals allowed before giving up. `None` = unlimited.
    pub max_redeals: Option<u32>,

    /// Rounds allowed per game. `None` = unlimited.
    pub max_rounds: Option<u32>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            winning_score: 41,
            min_bid: 2,
            max_bid: 13,
            min_bid_sum: 11,
            double_bid_threshold: 7,
            double_score_ceiling: 30,
            hand_size: 13,
            trump_rule: TrumpRule::default(),
            lead_rule: LeadRule::default(),
            max_redeals: Some(1000),
            max_rounds: Some(1000),
        }
    }
}

impl RulesConfig {
    /// Standard Tarneeb-41 rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: i32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the minimum bid sum.
    #[must_use]
    pub fn with_min_bid_sum(mut self, sum: u32) -> Self {
        self.min_bid_sum = sum;
        self
    }

    /// Set the trump rule.
    #[must_use]
    pub fn with_trump_rule(mut self, rule: TrumpRule) -> Self {
        self.trump_rule = rule;
        self
    }

    /// Set the first-lead rule.
    #[must_use]
    pub fn with_lead_rule(mut self, rule: LeadRule) -> Self {
        self.lead_rule = rule;
        self
    }

    /// Set the redeal limit.
    #[must_use]
    pub fn with_max_redeals(mut self, limit: Option<u32>) -> Self {
        self.max_redeals = limit;
        self
    }

    /// Set the per-game round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, limit: Option<u32>) -> Self {
        self.max_rounds = limit;
        self
    }

    /// Whether `bid` is within the legal range.
    #[must_use]
    pub fn is_valid_bid(&self, bid: u8) -> bool {
        (self.min_bid..=self.max_bid).contains(&bid)
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 || self.hand_size * 4 > Card::COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "hand size {} does not fit a 52-card deck",
                self.hand_size
            )));
        }
        if self.min_bid == 0 || self.min_bid > self.max_bid {
            return Err(EngineError::InvalidConfig(format!(
                "bid range {}..={} is empty",
                self.min_bid, self.max_bid
            )));
        }
        if self.max_bid as usize > self.hand_size {
            return Err(EngineError::InvalidConfig(format!(
                "max bid {} exceeds the {} tricks per round",
                self.max_bid, self.hand_size
            )));
        }
        if self.min_bid_sum > 4 * u32::from(self.max_bid) {
            return Err(EngineError::InvalidConfig(format!(
                "minimum bid sum {} is unreachable",
                self.min_bid_sum
            )));
        }
        if self.winning_score <= 0 {
            return Err(EngineError::InvalidConfig(
                "winning score must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_defaults_match_standard_game() {
        let config = RulesConfig::default();
        assert_eq!(config.winning_score, 41);
        assert_eq!(config.min_bid_sum, 11);
        assert_eq!((config.min_bid, config.max_bid), (2, 13));
        assert_eq!(config.double_bid_threshold, 7);
        assert_eq!(config.double_score_ceiling, 30);
        assert_eq!(config.max_redeals, Some(1000));
        assert_eq!(config.max_rounds, Some(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bid_range() {
        let config = RulesConfig::new();
        assert!(!config.is_valid_bid(1));
        assert!(config.is_valid_bid(2));
        assert!(config.is_valid_bid(13));
        assert!(!config.is_valid_bid(14));
    }

    #[test]
    fn test_trump_rule_select() {
        let dealt = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        assert_eq!(TrumpRule::LastDealtCard.select(&dealt), Some(Suit::Hearts));
        assert_eq!(
            TrumpRule::Fixed(Suit::Spades).select(&dealt),
            Some(Suit::Spades)
        );
        assert_eq!(TrumpRule::LastDealtCard.select(&[]), None);
    }

    #[test]
    fn test_lead_rule() {
        assert_eq!(LeadRule::default().first_lead(5), Seat::new(0));
        assert_eq!(LeadRule::Fixed(Seat::new(2)).first_lead(1), Seat::new(2));
        assert_eq!(LeadRule::Rotating.first_lead(1), Seat::new(0));
        assert_eq!(LeadRule::Rotating.first_lead(6), Seat::new(1));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RulesConfig::new().with_min_bid_sum(60);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));

        let config = RulesConfig::new().with_winning_score(0);
        assert!(config.validate().is_err());

        let mut config = RulesConfig::new();
        config.max_bid = 1;
        assert!(config.validate().is_err());
    }
}
