//! Seat decision policies.
//!
//! ## Overview
//!
//! Every seat is driven by a [`BiddingPolicy`] and a [`PlayPolicy`]. The
//! engine builds a read-only view for the acting seat, calls the policy,
//! and validates what comes back before touching any state.
//!
//! - [`RandomPolicy`]: seeded uniform choices, the baseline for simulations
//! - [`HeuristicPolicy`]: deterministic hand evaluation and bid-aware play
//!
//! Contested games are settled by a caller-supplied [`TieBreaker`].
//!
//! ## Usage
//!
//! ```rust
//! use tarneeb41::core::{GameRng, SeatMap};
//! use tarneeb41::policy::SeatPolicies;
//!
//! let mut rng = GameRng::new(42);
//! let policies = SeatMap::new(|_| SeatPolicies::random(&mut rng));
//! # let _ = policies;
//! ```

pub mod heuristic;
pub mod random;
pub mod traits;

pub use heuristic::HeuristicPolicy;
pub use random::{bid_floor, RandomPolicy, RANDOM_BID_SPREAD};
pub use traits::{
    BidView, BiddingPolicy, HighestScore, PlayPolicy, PlayView, PolicyError, SeatPolicies,
    TieBreaker,
};
