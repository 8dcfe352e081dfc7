//! Round and game orchestration.
//!
//! ## Key Types
//!
//! - `Round`: deal, bid, play thirteen tricks, score; redeals on a low bid
//!   sum
//! - `Table`: four seats with their policies, playing rounds until a seat
//!   reaches the winning score
//! - `CardStats`: per-game play and win counts by rank and trump

pub mod round;
pub mod stats;
pub mod table;

pub use round::{Round, RoundPhase, RoundResult};
pub use stats::{CardKey, CardStats};
pub use table::{GameStatus, GameSummary, Table};
