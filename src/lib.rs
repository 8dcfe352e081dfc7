//! # tarneeb41
//!
//! A rules engine for Tarneeb-41, a four-seat trick-taking card game in
//! which every seat bids for itself and the first seat to reach 41 points
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: trick resolution, legality and scoring are stateless
//!    functions in `rules`.
//!
//! 2. **Pluggable seats**: every decision goes through a `BiddingPolicy`
//!    or `PlayPolicy`. The engine validates each answer before applying
//!    it and never substitutes one.
//!
//! 3. **Deterministic**: dealing draws from a seeded `GameRng`; equal
//!    seeds and seeded policies replay equal games.
//!
//! ## Modules
//!
//! - `core`: seats, per-seat state, RNG, configuration, errors
//! - `cards`: ranks, suits, cards and the deck
//! - `rules`: trick resolution, suit-following, scoring
//! - `policy`: decision traits, random and heuristic seats, tie-breaking
//! - `game`: round and table orchestration, card statistics
//! - `nn`: view encoders and network-backed policies
//!
//! ## Example
//!
//! ```rust
//! use tarneeb41::{EngineError, HighestScore, RulesConfig, SeatMap, SeatPolicies, Table};
//!
//! let policies = SeatMap::new(|_| SeatPolicies::heuristic());
//! let mut table = Table::new(RulesConfig::default(), policies, 1).unwrap();
//!
//! match table.play_game_with(&mut HighestScore) {
//!     Ok(summary) => assert!(summary.final_scores[summary.winner] >= 41),
//!     Err(EngineError::AmbiguousWinner { seats }) => assert!(seats.len() >= 2),
//!     Err(other) => panic!("{other}"),
//! }
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod nn;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameRngState, LeadRule, Result, RulesConfig, Seat, SeatMap, SeatState,
    TrumpRule, SEATS,
};

pub use crate::cards::{Card, Deck, ParseCardError, Rank, Suit};

pub use crate::rules::{
    beats, legal_moves, resolve_trick, score_delta, Play, Trick, TrickResult, TrickWinner,
};

pub use crate::policy::{
    BidView, BiddingPolicy, HeuristicPolicy, HighestScore, PlayPolicy, PlayView, PolicyError,
    RandomPolicy, SeatPolicies, TieBreaker,
};

pub use crate::game::{
    CardKey, CardStats, GameStatus, GameSummary, Round, RoundPhase, RoundResult, Table,
};
