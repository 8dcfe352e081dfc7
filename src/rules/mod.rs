//! Game rules as pure functions.
//!
//! - `trick`: trick assembly and winner resolution under trump
//! - `legality`: which cards a seat may play
//! - `scoring`: per-seat score deltas at the end of a round
//!
//! Nothing here holds state; orchestration lives in `game`.

pub mod legality;
pub mod scoring;
pub mod trick;

pub use legality::{hand_has_suit, is_legal, legal_moves};
pub use scoring::{base_points, score_delta};
pub use trick::{beats, resolve_trick, Play, Trick, TrickResult, TrickWinner};
