//! Engine error taxonomy.
//!
//! Every variant is a contract violation by a caller or a policy; none of
//! them is transient, so nothing in the engine retries. A round discarded
//! for a low bid sum is ordinary control flow and never surfaces here.

use thiserror::Error;

use super::seat::Seat;
use crate::cards::Card;
use crate::policy::PolicyError;

/// Errors raised by deck, trick, round and game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A deal asked for more cards than the deck holds.
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },

    /// A trick had the wrong number of cards, a repeated card, or plays out
    /// of rotation. Indicates a broken hand or dealing invariant upstream.
    #[error("malformed trick: {0}")]
    MalformedTrick(String),

    /// A play policy returned a card outside the legal-move set.
    #[error("{seat} played illegal card {card}")]
    IllegalCard { seat: Seat, card: Card },

    /// A bidding policy returned a bid outside the configured range.
    #[error("{seat} made invalid bid {bid}")]
    InvalidBid { seat: Seat, bid: u8 },

    /// Several seats crossed the winning score in the same round and no
    /// tie-breaker resolved it.
    #[error("ambiguous winner: seats {seats:?} reached the winning score together")]
    AmbiguousWinner { seats: Vec<Seat> },

    /// A policy call failed.
    #[error("policy for {seat} failed: {source}")]
    Policy {
        seat: Seat,
        #[source]
        source: PolicyError,
    },

    /// Bids kept summing below the minimum for too many consecutive deals.
    #[error("gave up after {attempts} consecutive redeals")]
    RedealLimit { attempts: u32 },

    /// The game hit its configured round limit without a winner.
    #[error("no winner after {rounds} rounds")]
    RoundLimit { rounds: u32 },

    /// Inconsistent rules configuration.
    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTrick(reason.into())
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_error_messages() {
        let err = EngineError::InsufficientCards {
            requested: 13,
            remaining: 12,
        };
        assert_eq!(err.to_string(), "cannot deal 13 cards, only 12 remain");

        let err = EngineError::IllegalCard {
            seat: Seat::new(2),
            card: Card::new(Rank::Queen, Suit::Hearts),
        };
        assert_eq!(err.to_string(), "p2 played illegal card Q♥");

        let err = EngineError::InvalidBid {
            seat: Seat::new(0),
            bid: 14,
        };
        assert_eq!(err.to_string(), "p0 made invalid bid 14");
    }

    #[test]
    fn test_policy_error_source() {
        use std::error::Error as _;

        let err = EngineError::Policy {
            seat: Seat::new(1),
            source: PolicyError::new("model unavailable"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("model unavailable"));
    }
}
