//! Core engine types: seats, per-seat state, RNG, configuration, errors.
//!
//! Everything here is game-state plumbing; the card rules live in
//! `cards` and `rules`, orchestration in `game`.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{LeadRule, RulesConfig, TrumpRule};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap, SeatState, SEATS};
